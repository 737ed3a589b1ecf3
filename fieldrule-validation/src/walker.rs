// Record walker

use crate::{
    Error, Inspect, RuleError, RuleSet, Shape, ValidationError, ValidationErrors, ValidatorConfig,
    Value, dispatch, dispatch_slice,
};
use tracing::debug;

/// Validate every rule-bearing field of `input`.
///
/// Uses [`ValidatorConfig::global`] for reporting.
pub fn validate(input: &dyn Inspect) -> Result<(), Error> {
    validate_with(input, ValidatorConfig::global())
}

/// Validate every rule-bearing field of `input` with an explicit config.
///
/// Fields are visited in declaration order. A field without rules is never
/// read. Every other problem (private field, bad rule string, failed check)
/// is recorded against its field and the walk moves on; only a non-struct
/// input stops it.
pub fn validate_with(input: &dyn Inspect, config: &ValidatorConfig) -> Result<(), Error> {
    let record = match input.shape() {
        Shape::Record(record) => record,
        Shape::Value(kind) => return Err(Error::NotStruct(kind)),
    };

    let mut errors = ValidationErrors::new(Vec::new()).with_separator(config.separator.as_str());

    for (index, field) in record.fields().iter().enumerate() {
        if field.rules.is_empty() {
            debug!(field = field.name, "no rules, skipping");
            continue;
        }

        let outcome = if field.exported {
            check_field(field.rules, &record.value(index))
        } else {
            Err(RuleError::UnexportedField)
        };

        if let Err(kind) = outcome {
            debug!(field = field.name, rules = field.rules, error = %kind, "field failed");
            errors.add(ValidationError::new(field.name, field.rules, kind));
        }
    }

    debug!(failures = errors.len(), "record validated");

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Fields(errors))
    }
}

fn check_field(rules: &str, value: &Value<'_>) -> Result<(), RuleError> {
    let rules = RuleSet::parse(rules)?;
    match value {
        Value::Seq(elements) => dispatch_slice(&rules, elements),
        other => dispatch(&rules, other),
    }
}
