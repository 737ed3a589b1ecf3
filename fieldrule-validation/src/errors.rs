// Validation errors

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Why a single field failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule string could not be parsed
    #[error("invalid validator syntax in `{clause}`: {reason}")]
    InvalidSyntax { clause: String, reason: &'static str },

    /// A rule was attached to a field that is not `pub`
    #[error("validation for unexported field is not allowed")]
    UnexportedField,

    /// A check failed, or a rule was applied to a kind it does not support
    #[error("field not valid")]
    FieldNotValid,
}

impl RuleError {
    pub(crate) fn syntax(clause: &str, reason: &'static str) -> Self {
        RuleError::InvalidSyntax {
            clause: clause.to_string(),
            reason,
        }
    }

    /// Short machine-friendly name of the failure kind
    pub fn constraint(&self) -> &'static str {
        match self {
            RuleError::InvalidSyntax { .. } => "syntax",
            RuleError::UnexportedField => "unexported",
            RuleError::FieldNotValid => "notValid",
        }
    }
}

/// Validation failure for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Rule string declared on the field
    pub rule: String,

    /// What went wrong
    pub kind: RuleError,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, rule: impl Into<String>, kind: RuleError) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            kind,
        }
    }

    /// Get the constraint name of the failure
    pub fn constraint(&self) -> &'static str {
        self.kind.constraint()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuleError::FieldNotValid => {
                write!(f, "field: {} not valid for {}", self.field, self.rule)
            }
            kind => write!(f, "field: {}: {}", self.field, kind),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

pub(crate) const DEFAULT_SEPARATOR: &str = "\n";

/// Collection of validation errors, in field declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
    separator: String,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self {
            errors,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Set the text placed between messages when displayed
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "rule": e.rule,
                    "message": e.to_string(),
                    "constraint": e.constraint(),
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Result of validating a value
#[derive(Error, Debug)]
pub enum Error {
    /// The value handed to `validate` is not a struct with named fields
    #[error("wrong argument given, should be a struct (got {0})")]
    NotStruct(Kind),

    /// One or more fields failed
    #[error(transparent)]
    Fields(#[from] ValidationErrors),
}

impl Error {
    /// Per-field failures, if any were collected
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Fields(errors) => Some(errors),
            Error::NotStruct(_) => None,
        }
    }
}
