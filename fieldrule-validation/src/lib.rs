//! Rule-string validation engine for fieldrule
//!
//! Fields carry compact rule strings such as `len:5` or `min:1&max:10`.
//! This crate parses those strings, checks field values against them, and
//! collects every failing field into one error.
//!
//! # Rule language
//!
//! | Clause       | Strings                  | Integers           |
//! |--------------|--------------------------|--------------------|
//! | `len:n`      | exactly `n` characters   | always fails       |
//! | `min:n`      | at least `n` characters  | `>= n`             |
//! | `max:n`      | at most `n` characters   | `<= n`             |
//! | `in:a,b,...` | equals one of the values | equals one of them |
//!
//! Clauses are joined with `&` and checked left to right; a field stops at
//! its first failing clause. Sequence fields apply each clause to every
//! element.
//!
//! # Examples
//!
//! ## Parsing rules
//!
//! ```
//! use fieldrule_validation::{Rule, RuleSet};
//!
//! let rules: RuleSet = "min:1&max:5".parse().unwrap();
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules.iter().next(), Some(&Rule::Min(1)));
//! ```
//!
//! ## Dispatching against a value
//!
//! ```
//! use fieldrule_validation::{dispatch, RuleSet, Value};
//!
//! let rules = RuleSet::parse("in:admin,user").unwrap();
//! assert!(dispatch(&rules, &Value::Str("admin")).is_ok());
//! assert!(dispatch(&rules, &Value::Str("root")).is_err());
//! ```
//!
//! ## Validating a record
//!
//! Records normally come from `#[derive(Validate)]` in the `fieldrule`
//! crate. By hand it looks like this:
//!
//! ```
//! use fieldrule_validation::{
//!     FieldDescriptor, FieldValue, Inspect, Record, Shape, Validate, Value,
//! };
//!
//! struct Signup {
//!     code: String,
//! }
//!
//! impl Record for Signup {
//!     fn fields(&self) -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new("code", "len:4", true)];
//!         FIELDS
//!     }
//!
//!     fn value(&self, _index: usize) -> Value<'_> {
//!         self.code.field_value()
//!     }
//! }
//!
//! impl Inspect for Signup {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Record(self)
//!     }
//! }
//!
//! assert!(Signup { code: "ab12".into() }.validate().is_ok());
//! let err = Signup { code: "ab1".into() }.validate().unwrap_err();
//! assert_eq!(err.to_string(), "field: code not valid for len:4");
//! ```

mod config;
mod dispatcher;
mod errors;
mod rules;
mod traits;
pub mod validators;
mod value;
mod walker;

pub use config::{ConfigError, SEPARATOR_ENV, ValidatorConfig};
pub use dispatcher::*;
pub use errors::*;
pub use rules::*;
pub use traits::*;
pub use value::*;
pub use walker::*;
