// Procedural macros for fieldrule
// `#[derive(Validate)]` turns a struct declaration into a static field table.

use proc_macro::TokenStream;

mod record;

/// Derive the field table used by `fieldrule::validate`.
///
/// Rule strings are attached with `#[validate("...")]`. Fields without the
/// attribute are skipped. Rules on non-`pub` fields are reported as
/// failures at validation time.
///
/// # Examples
///
/// ```ignore
/// #[derive(Validate)]
/// pub struct Signup {
///     #[validate("min:3&max:20")]
///     pub username: String,
///     #[validate("min:18")]
///     pub age: u32,
///     #[validate("in:free,pro")]
///     pub plan: String,
///     pub referrer: Option<String>,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    record::derive_validate_impl(input)
}
