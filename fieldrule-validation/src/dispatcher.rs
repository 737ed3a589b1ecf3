// Rule dispatch against runtime values

use crate::validators::{char_len, length_equals, maximum, membership, minimum};
use crate::{Rule, RuleError, RuleSet, Value};
use tracing::trace;

/// Apply every rule to `value`, stopping at the first failure.
///
/// Sequences are not unpacked here, see [`dispatch_slice`].
pub fn dispatch(rules: &RuleSet, value: &Value<'_>) -> Result<(), RuleError> {
    for rule in rules {
        apply(rule, value)?;
    }
    Ok(())
}

/// Apply rules to each element of a sequence.
///
/// Rule-major: the first rule is checked against every element before the
/// next rule is tried on any of them. The first failing pair ends the walk.
pub fn dispatch_slice(rules: &RuleSet, elements: &[Value<'_>]) -> Result<(), RuleError> {
    for rule in rules {
        for element in elements {
            apply(rule, element)?;
        }
    }
    Ok(())
}

fn apply(rule: &Rule, value: &Value<'_>) -> Result<(), RuleError> {
    trace!(rule = %rule, kind = %value.kind(), "applying rule");

    match (rule, value) {
        (Rule::Len(n), Value::Str(s)) => length_equals(s, *n),
        (Rule::Min(n), Value::Str(s)) => minimum(char_len(s), *n),
        (Rule::Min(n), Value::Int(v)) => minimum(*v, *n),
        (Rule::Max(n), Value::Str(s)) => maximum(char_len(s), *n),
        (Rule::Max(n), Value::Int(v)) => maximum(*v, *n),
        (Rule::In(set), Value::Str(s)) => membership(*s, set.strings()),
        (Rule::In(set), Value::Int(v)) => match set.ints() {
            Some(ints) => membership(v, ints),
            None => Err(RuleError::syntax(
                &rule.to_string(),
                "membership arguments are not integers",
            )),
        },
        _ => Err(RuleError::FieldNotValid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(s: &str) -> RuleSet {
        RuleSet::parse(s).unwrap()
    }

    #[test]
    fn test_len_on_strings_only() {
        assert!(dispatch(&rules("len:5"), &Value::Str("hello")).is_ok());
        assert!(dispatch(&rules("len:5"), &Value::Str("hell")).is_err());
        assert_eq!(
            dispatch(&rules("len:5"), &Value::Int(5)),
            Err(RuleError::FieldNotValid)
        );
    }

    #[test]
    fn test_min_max_on_string_length() {
        let r = rules("min:2&max:4");
        assert!(dispatch(&r, &Value::Str("ab")).is_ok());
        assert!(dispatch(&r, &Value::Str("abcd")).is_ok());
        assert!(dispatch(&r, &Value::Str("a")).is_err());
        assert!(dispatch(&r, &Value::Str("abcde")).is_err());
        // lexical value is irrelevant
        assert!(dispatch(&rules("min:3"), &Value::Str("999")).is_ok());
    }

    #[test]
    fn test_membership_pool_follows_kind() {
        let r = rules("in:1,2,3");
        assert!(dispatch(&r, &Value::Int(2)).is_ok());
        assert!(dispatch(&r, &Value::Int(4)).is_err());
        assert!(dispatch(&r, &Value::Str("2")).is_ok());

        let words = rules("in:admin,user");
        assert!(dispatch(&words, &Value::Str("user")).is_ok());
        assert!(matches!(
            dispatch(&words, &Value::Int(1)),
            Err(RuleError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_empty_membership_rejects_everything() {
        let r = rules("in:");
        assert!(dispatch(&r, &Value::Int(0)).is_err());
        assert!(dispatch(&r, &Value::Str("")).is_err());
    }

    #[test]
    fn test_unsupported_kinds_fail() {
        use crate::Kind;

        let r = rules("min:0");
        assert_eq!(
            dispatch(&r, &Value::Other(Kind::Bool)),
            Err(RuleError::FieldNotValid)
        );
        assert_eq!(
            dispatch(&r, &Value::Seq(vec![Value::Int(1)])),
            Err(RuleError::FieldNotValid)
        );
    }

    #[test]
    fn test_first_failure_stops_dispatch() {
        // `in:a` cannot be applied to an integer and would report a syntax error
        assert_eq!(
            dispatch(&rules("min:5&in:a"), &Value::Int(0)),
            Err(RuleError::FieldNotValid)
        );
        assert!(matches!(
            dispatch(&rules("in:a&min:5"), &Value::Int(0)),
            Err(RuleError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_empty_rule_set_passes() {
        assert!(dispatch(&RuleSet::default(), &Value::Int(0)).is_ok());
    }

    #[test]
    fn test_slice_passes_when_every_element_does() {
        let values = [Value::Int(2), Value::Int(5), Value::Int(9)];
        assert!(dispatch_slice(&rules("min:2"), &values).is_ok());
        assert!(dispatch_slice(&rules("min:3"), &values).is_err());
        assert!(dispatch_slice(&rules("min:100"), &[]).is_ok());
    }

    #[test]
    fn test_slice_elements_keep_their_kind() {
        let mixed = [Value::Str("abc"), Value::Int(3)];
        assert!(dispatch_slice(&rules("min:3"), &mixed).is_ok());
        assert!(dispatch_slice(&rules("len:3"), &mixed).is_err());
    }

    #[test]
    fn test_slice_is_rule_major() {
        // "len:5" would fail on the first element, but membership is tried on
        // the second element before that and its error is the one reported.
        let values = [Value::Str("a"), Value::Int(5)];
        assert!(matches!(
            dispatch_slice(&rules("in:a,b&len:5"), &values),
            Err(RuleError::InvalidSyntax { .. })
        ));
        assert_eq!(
            dispatch_slice(&rules("len:5&in:a,b"), &values),
            Err(RuleError::FieldNotValid)
        );
    }
}
