//! Coalesce - return the first non-empty value from a list of candidates.
//!
//! Given an ordered list of candidates, every function in this crate returns
//! the leftmost one that is not "empty", falling back to a sentinel when none
//! qualify. Nothing here allocates or blocks.
//!
//! - [`first`] and the typed variants ([`string`], [`duration`], [`error`],
//!   [`int32`], ...) work on a single type with a [`Zero`] value.
//! - [`any`] works on heterogeneous `&dyn Classify` candidates and judges
//!   each by its runtime [`Shape`].
//! - [`coalesce!`] is the lazy form: later expressions are only evaluated if
//!   everything before them was zero.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use coalesce::{any, position, Classify};
//!
//! // Typed: the first non-zero value of one type.
//! assert_eq!(coalesce::string(["", "Hello", "", "World"]), "Hello");
//! assert_eq!(coalesce::int64([0, 0, 7]), 7);
//!
//! // Generic: mixed types, each with its own emptiness rule.
//! let empty: Vec<i32> = vec![];
//! let no_map: Option<&HashMap<String, i32>> = None;
//! let candidates: [&dyn Classify; 5] = [&empty, &no_map, &0, &"", &42];
//! assert_eq!(position(&candidates), Some(4));
//! assert!(any(&[&coalesce::Nil]).is_none());
//!
//! // Lazy: stops evaluating at the first non-zero value.
//! fn configured_port() -> u16 {
//!     panic!("never evaluated");
//! }
//! let port: u16 = coalesce::coalesce!(0, 8080, configured_port());
//! assert_eq!(port, 8080);
//! ```
//!
//! # Emptiness Rules
//!
//! | Kind | Examples | Empty when |
//! |------|----------|------------|
//! | Scalar | numbers, `bool`, `char`, text, durations, timestamps | equal to the zero value |
//! | Reference | `Option<T>`, `Box<T>`, `Rc<T>`, raw pointers | null / `None` |
//! | Container | `Vec`, arrays, slices, maps, sets, queues | no elements |
//!
//! A non-null reference is never empty, even when it points at a zero value.
//!
//! # Features
//!
//! - `derive` (default): `#[derive(Classify)]` for user types.
//! - `chrono` (default): [`time`], [`zero_time`] and `Zero`/`Classify` for
//!   `chrono` timestamps and `TimeDelta`.

// Lets the derive macro's `::coalesce::` paths resolve inside this crate.
extern crate self as coalesce;

mod any;
mod classify;
mod error;
mod shape;
#[cfg(feature = "chrono")]
mod time;
mod typed;
mod zero;

// Re-export public API
pub use any::{any, position};
pub use classify::{Classify, Nil};
pub use error::{CoalesceError, Result};
pub use shape::{Kind, Shape};
#[cfg(feature = "chrono")]
pub use time::zero_time;
#[cfg(feature = "chrono")]
pub use typed::time;
pub use typed::{
    byte, code_point, duration, error, first, float32, float64, int, int16, int32, int64, int8,
    string, try_first, uint, uint16, uint32, uint64, uint8,
};
pub use zero::Zero;

#[cfg(feature = "derive")]
pub use coalesce_macros::Classify;

/// Evaluates candidates left to right and yields the first non-zero one.
///
/// Unlike [`first`], the expressions are evaluated lazily: once a non-zero
/// value is found, the remaining expressions are never evaluated. With no
/// candidates the macro yields `Zero::zero()` for the inferred type.
///
/// ```
/// use coalesce::coalesce;
///
/// fn from_env() -> String {
///     String::new()
/// }
///
/// let name = coalesce!(from_env(), "default".to_string());
/// assert_eq!(name, "default");
/// ```
#[macro_export]
macro_rules! coalesce {
    () => {
        $crate::Zero::zero()
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {{
        let candidate = $head;
        if !$crate::Zero::is_zero(&candidate) {
            candidate
        } else {
            $crate::coalesce!($($tail),*)
        }
    }};
}
