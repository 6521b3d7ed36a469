//! Attribute parsing for the Classify derive macro.
//!
//! Two attribute positions are recognised:
//!
//! - type level: `#[classify(transparent)]` or `#[classify(default)]`
//! - field level: `#[classify(skip)]`

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Meta, Result, Token,
};

/// How the derived implementation decides whether a value is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Scalar, zero when every non-skipped field is empty.
    #[default]
    Fields,
    /// Same shape as the single wrapped field.
    Transparent,
    /// Scalar, zero when equal to `Default::default()`.
    Default,
}

/// Type-level attributes from `#[classify(...)]`.
#[derive(Debug, Clone)]
pub struct ContainerAttr {
    /// Selected mode.
    pub mode: Mode,
    /// Span of the mode keyword, for error reporting.
    pub span: Span,
}

impl Default for ContainerAttr {
    fn default() -> Self {
        ContainerAttr {
            mode: Mode::Fields,
            span: Span::call_site(),
        }
    }
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();
        let mut seen = false;

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            let mode = match &meta {
                Meta::Path(p) if p.is_ident("transparent") => Mode::Transparent,
                Meta::Path(p) if p.is_ident("default") => Mode::Default,
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown classify attribute. Expected: transparent or default",
                    ))
                }
            };

            if seen {
                return Err(Error::new(
                    meta.span(),
                    "only one of transparent or default may be given",
                ));
            }
            seen = true;
            attr.mode = mode;
            attr.span = meta.span();
        }

        Ok(attr)
    }
}

/// Field-level attributes from `#[classify(...)]`.
#[derive(Debug, Clone, Default)]
pub struct FieldAttr {
    /// Leave this field out of the field-wise emptiness check.
    pub skip: bool,
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown classify field attribute. Expected: skip",
                    ))
                }
            }
        }

        Ok(attr)
    }
}

/// Extract the type-level `#[classify(...)]` attribute.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    for attr in attrs {
        if attr.path().is_ident("classify") {
            return attr.parse_args::<ContainerAttr>();
        }
    }
    Ok(ContainerAttr::default())
}

/// Extract the `#[classify(...)]` attribute of a field.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("classify") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
