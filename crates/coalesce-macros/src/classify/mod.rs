//! Implementation of the `#[derive(Classify)]` macro.
//!
//! This module generates `coalesce::Classify` implementations from struct and
//! enum definitions and their `#[classify(...)]` annotations.

mod attrs;
mod derive;

pub use derive::classify_derive_impl;
