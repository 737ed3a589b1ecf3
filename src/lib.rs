// fieldrule - declarative struct validation from compact rule strings
//
// Attach rules to fields with `#[validate("...")]`, derive `Validate`, and
// call `.validate()` to collect every failing field.

// Re-export the engine
pub use fieldrule_validation::*;

// Re-export the derive macro
pub use fieldrule_derive::Validate;

// Prelude for common imports
pub mod prelude {
    pub use crate::{Error, Validate, ValidationError, ValidationErrors, ValidatorConfig};
}
