//! Implementation of the `#[derive(Classify)]` macro.
//!
//! This macro generates an implementation of the `coalesce::Classify` trait
//! for structs and enums.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_quote, spanned::Spanned, Data, DataStruct, DeriveInput, Error, Generics, Index, Member,
    Result, Type,
};

use super::attrs::{parse_container_attrs, parse_field_attrs, ContainerAttr, Mode};

/// Main implementation of the Classify derive macro.
pub fn classify_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let type_name = &input.ident;
    let container = parse_container_attrs(&input.attrs)?;

    let body = match (&input.data, container.mode) {
        (Data::Union(_), _) => {
            return Err(Error::new(
                input.span(),
                "Classify cannot be derived for unions",
            ))
        }
        (_, Mode::Default) => quote! {
            ::coalesce::Shape::Scalar {
                zero: *self == <Self as ::core::default::Default>::default(),
            }
        },
        (Data::Enum(_), _) => {
            return Err(Error::new(
                input.span(),
                "Classify on enums requires #[classify(default)]",
            ))
        }
        (Data::Struct(data), Mode::Transparent) => transparent_body(data, &container)?,
        (Data::Struct(data), Mode::Fields) => fields_body(data)?,
    };

    let generics = add_bounds(&input.generics, container.mode);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::coalesce::Classify for #type_name #ty_generics #where_clause {
            fn shape(&self) -> ::coalesce::Shape {
                #body
            }
        }
    };

    Ok(expanded)
}

/// Delegates to the only field of a newtype.
fn transparent_body(data: &DataStruct, container: &ContainerAttr) -> Result<TokenStream> {
    let mut fields = data.fields.iter();
    let (Some(field), None) = (fields.next(), fields.next()) else {
        return Err(Error::new(
            container.span,
            "#[classify(transparent)] requires a struct with exactly one field",
        ));
    };

    let member = field
        .ident
        .clone()
        .map(Member::Named)
        .unwrap_or_else(|| Member::Unnamed(Index::from(0)));

    Ok(quote! {
        ::coalesce::Classify::shape(&self.#member)
    })
}

/// Zero when every non-skipped field is empty.
fn fields_body(data: &DataStruct) -> Result<TokenStream> {
    let mut checks: Vec<TokenStream> = Vec::new();

    for (index, field) in data.fields.iter().enumerate() {
        if parse_field_attrs(&field.attrs)?.skip {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: index as u32,
                span: field.span(),
            }),
        };

        checks.push(empty_check(&field.ty, quote!(&self.#member), 0));
    }

    if checks.is_empty() {
        return Ok(quote! {
            ::coalesce::Shape::Scalar { zero: true }
        });
    }

    Ok(quote! {
        ::coalesce::Shape::Scalar {
            zero: #(#checks)&&*,
        }
    })
}

/// Emptiness check for one field. Array fields are zero when every element
/// is, nested arrays included.
fn empty_check(ty: &Type, value: TokenStream, depth: usize) -> TokenStream {
    match ty {
        Type::Array(array) => {
            let item = format_ident!("item{}", depth);
            let inner = empty_check(&array.elem, quote!(#item), depth + 1);
            quote! {
                (#value).iter().all(|#item| #inner)
            }
        }
        Type::Paren(paren) => empty_check(&paren.elem, value, depth),
        Type::Group(group) => empty_check(&group.elem, value, depth),
        _ => quote! {
            ::coalesce::Classify::is_empty_value(#value)
        },
    }
}

/// Adds the bounds the generated body needs.
fn add_bounds(generics: &Generics, mode: Mode) -> Generics {
    let mut generics = generics.clone();
    match mode {
        Mode::Default => {
            generics.make_where_clause().predicates.push(parse_quote! {
                Self: ::core::default::Default + ::core::cmp::PartialEq
            });
        }
        Mode::Fields | Mode::Transparent => {
            for param in generics.type_params_mut() {
                param.bounds.push(parse_quote!(::coalesce::Classify));
            }
        }
    }
    generics
}
