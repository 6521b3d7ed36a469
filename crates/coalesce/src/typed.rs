//! Typed variants: the first non-zero candidate of a single type.
//!
//! [`first`] is the one implementation. The named functions below it are
//! fixed-type entry points that read well at call sites and help inference
//! with integer and float literals.

use std::time::Duration;

use tracing::debug;

use crate::error::{CoalesceError, Result};
use crate::zero::Zero;

/// Returns the first candidate that is not the zero value, or the zero value.
///
/// Candidates after the winner are not inspected.
///
/// # Example
///
/// ```
/// assert_eq!(coalesce::first([0, 0, 3, 4]), 3);
/// assert_eq!(coalesce::first(Vec::<u8>::new()), 0);
/// ```
pub fn first<T, I>(candidates: I) -> T
where
    T: Zero,
    I: IntoIterator<Item = T>,
{
    candidates
        .into_iter()
        .find(|candidate| !candidate.is_zero())
        .unwrap_or_else(T::zero)
}

/// Like [`first`], but reports an error instead of returning the zero value.
///
/// # Example
///
/// ```
/// use coalesce::CoalesceError;
///
/// assert_eq!(coalesce::try_first(["", "b"]), Ok("b"));
/// assert_eq!(
///     coalesce::try_first(["", ""]),
///     Err(CoalesceError::AllEmpty { inspected: 2 })
/// );
/// ```
pub fn try_first<T, I>(candidates: I) -> Result<T>
where
    T: Zero,
    I: IntoIterator<Item = T>,
{
    let mut inspected = 0;
    for candidate in candidates {
        if !candidate.is_zero() {
            return Ok(candidate);
        }
        inspected += 1;
    }

    debug!(inspected, "no non-empty candidate");
    Err(CoalesceError::AllEmpty { inspected })
}

/// Returns the first non-empty string.
///
/// Works with any text type that has a [`Zero`] value: `&str`, `String` or
/// `Cow<str>`.
///
/// ```
/// assert_eq!(coalesce::string(["", "Hello", "", "World"]), "Hello");
///
/// let owned = vec![String::new(), "from env".to_string()];
/// assert_eq!(coalesce::string(owned), "from env");
/// ```
pub fn string<S, I>(candidates: I) -> S
where
    S: Zero + AsRef<str>,
    I: IntoIterator<Item = S>,
{
    first(candidates)
}

/// Returns the first non-zero duration.
///
/// ```
/// use std::time::Duration;
///
/// let d = coalesce::duration([Duration::ZERO, Duration::from_secs(1), Duration::from_millis(1)]);
/// assert_eq!(d, Duration::from_secs(1));
/// ```
pub fn duration<I>(candidates: I) -> Duration
where
    I: IntoIterator<Item = Duration>,
{
    first(candidates)
}

/// Returns the first non-zero timestamp, or [`zero_time`](crate::zero_time).
#[cfg(feature = "chrono")]
pub fn time<I>(candidates: I) -> chrono::DateTime<chrono::Utc>
where
    I: IntoIterator<Item = chrono::DateTime<chrono::Utc>>,
{
    first(candidates)
}

/// Returns the first present error.
///
/// ```
/// use std::io;
///
/// let err = coalesce::error([None, Some(io::Error::other("err1")), Some(io::Error::other("err2"))]);
/// assert_eq!(err.map(|e| e.to_string()), Some("err1".to_string()));
/// ```
pub fn error<E, I>(candidates: I) -> Option<E>
where
    I: IntoIterator<Item = Option<E>>,
{
    first(candidates)
}

macro_rules! typed_variants {
    ($($(#[$doc:meta])* $name:ident => $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<I>(candidates: I) -> $ty
            where
                I: IntoIterator<Item = $ty>,
            {
                first(candidates)
            }
        )*
    };
}

typed_variants! {
    /// Returns the first non-zero byte.
    byte => u8;
    /// Returns the first non-NUL code point.
    code_point => char;
    /// Returns the first non-zero `isize`.
    int => isize;
    /// Returns the first non-zero `i8`.
    int8 => i8;
    /// Returns the first non-zero `i16`.
    int16 => i16;
    /// Returns the first non-zero `i32`.
    int32 => i32;
    /// Returns the first non-zero `i64`.
    int64 => i64;
    /// Returns the first non-zero `usize`.
    uint => usize;
    /// Returns the first non-zero `u8`.
    uint8 => u8;
    /// Returns the first non-zero `u16`.
    uint16 => u16;
    /// Returns the first non-zero `u32`.
    uint32 => u32;
    /// Returns the first non-zero `u64`.
    uint64 => u64;
    /// Returns the first non-zero `f32`.
    float32 => f32;
    /// Returns the first non-zero `f64`.
    float64 => f64;
}
