//! Proc macros for Coalesce.
//!
//! This crate provides the [`Classify`] derive macro. It is re-exported by
//! the `coalesce` crate behind its default `derive` feature, so most users
//! never depend on it directly.

mod classify;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `coalesce::Classify` for a struct or enum.
///
/// For working examples, see `coalesce/tests/derive.rs`.
///
/// # Modes
///
/// | Attribute | Shape | Empty when |
/// |-----------|-------|------------|
/// | (none) | `Scalar` | every non-skipped field is empty |
/// | `#[classify(transparent)]` | same as the wrapped field | the wrapped field is empty |
/// | `#[classify(default)]` | `Scalar` | `*self == Self::default()` |
///
/// Enums must use `#[classify(default)]`. Unions are not supported.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Leave the field out of the emptiness check |
///
/// # Example
///
/// ```ignore
/// use coalesce::{any, position, Classify};
///
/// #[derive(Classify)]
/// struct Endpoint {
///     host: String,
///     port: u16,
///     #[classify(skip)]
///     retries: u8,
/// }
///
/// #[derive(Classify)]
/// #[classify(transparent)]
/// struct Tags(Vec<String>);
///
/// let unset = Endpoint { host: String::new(), port: 0, retries: 3 };
/// let tags = Tags(vec!["a".into()]);
/// assert_eq!(position(&[&unset, &tags]), Some(1));
/// ```
///
/// # Compile-Time Errors
///
/// - Unknown or conflicting `#[classify(...)]` options
/// - `transparent` on a struct without exactly one field
/// - Enums without `#[classify(default)]`, and unions
#[proc_macro_derive(Classify, attributes(classify))]
pub fn classify_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    classify::classify_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
