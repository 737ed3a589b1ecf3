// Rule grammar and parser
//
//     rules    := clause ("&" clause)*
//     clause   := name ":" arg_list
//     arg_list := arg ("," arg)*      (empty only for "in")

use crate::RuleError;
use std::fmt;
use std::str::FromStr;

const CLAUSE_SEPARATOR: char = '&';
const NAME_SEPARATOR: char = ':';
const ARG_SEPARATOR: char = ',';

/// Allowed values of a membership clause.
///
/// The arguments are kept verbatim for string fields. The integer pool is
/// only present when every argument parsed as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    strings: Vec<String>,
    ints: Option<Vec<i64>>,
}

impl Membership {
    fn parse(args: &str) -> Self {
        if args.is_empty() {
            return Self {
                strings: Vec::new(),
                ints: Some(Vec::new()),
            };
        }

        let strings: Vec<String> = args.split(ARG_SEPARATOR).map(str::to_string).collect();
        let ints = strings
            .iter()
            .map(|arg| arg.trim().parse::<i64>().ok())
            .collect::<Option<Vec<_>>>();

        Self { strings, ints }
    }

    /// Pool compared against string fields
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Pool compared against integer fields
    pub fn ints(&self) -> Option<&[i64]> {
        self.ints.as_deref()
    }
}

/// A single parsed clause.
///
/// `len`, `min` and `max` take an integer; when more than one is given only
/// the first is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `len:n`, exact character count of a string
    Len(i64),
    /// `min:n`, lower bound of an integer or of a string's length
    Min(i64),
    /// `max:n`, upper bound of an integer or of a string's length
    Max(i64),
    /// `in:a,b,...`, membership in an explicit set
    In(Membership),
}

impl Rule {
    /// Parse a single `name:args` clause
    pub fn parse(clause: &str) -> Result<Self, RuleError> {
        let Some((name, args)) = clause.split_once(NAME_SEPARATOR) else {
            return Err(RuleError::syntax(clause, "missing `:` after rule name"));
        };

        match name.trim() {
            "len" => parse_bound(clause, args).map(Rule::Len),
            "min" => parse_bound(clause, args).map(Rule::Min),
            "max" => parse_bound(clause, args).map(Rule::Max),
            "in" => Ok(Rule::In(Membership::parse(args))),
            "" => Err(RuleError::syntax(clause, "empty rule name")),
            _ => Err(RuleError::syntax(clause, "unknown rule name")),
        }
    }

    /// Get the clause name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Len(_) => "len",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::In(_) => "in",
        }
    }
}

fn parse_bound(clause: &str, args: &str) -> Result<i64, RuleError> {
    let mut first = None;
    for arg in args.split(ARG_SEPARATOR) {
        let value = arg
            .trim()
            .parse::<i64>()
            .map_err(|_| RuleError::syntax(clause, "argument is not an integer"))?;
        first.get_or_insert(value);
    }
    // split always yields at least one item, and an empty one fails to parse
    first.ok_or_else(|| RuleError::syntax(clause, "missing argument"))
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Len(n) | Rule::Min(n) | Rule::Max(n) => write!(f, "{}:{}", self.name(), n),
            Rule::In(set) => write!(f, "in:{}", set.strings.join(",")),
        }
    }
}

/// Ordered rules of one field, evaluated left to right
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parse a full rule string. Any bad clause rejects the whole string.
    pub fn parse(rules: &str) -> Result<Self, RuleError> {
        rules
            .split(CLAUSE_SEPARATOR)
            .map(Rule::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(|rules| Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

/// Parse a full rule string such as `min:1&max:5`
pub fn parse_rule_set(rules: &str) -> Result<RuleSet, RuleError> {
    RuleSet::parse(rules)
}

impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleSet::parse(s)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", CLAUSE_SEPARATOR)?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
