//! The [`Zero`] trait used by the typed variants.

use std::borrow::Cow;
use std::time::Duration;

/// Types with a canonical zero value.
///
/// The typed variants return the first candidate for which
/// [`is_zero`](Zero::is_zero) is `false`, and [`zero`](Zero::zero) when there
/// is none.
///
/// # Example
///
/// ```
/// use coalesce::Zero;
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl Zero for Port {
///     fn zero() -> Self {
///         Port(0)
///     }
///
///     fn is_zero(&self) -> bool {
///         self.0 == 0
///     }
/// }
///
/// assert_eq!(coalesce::first([Port(0), Port(8080)]), Port(8080));
/// ```
pub trait Zero: Sized {
    /// Returns the zero value of this type.
    fn zero() -> Self;

    /// Returns `true` if this value is the zero value.
    fn is_zero(&self) -> bool;
}

macro_rules! zero_numbers {
    ($zero:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Zero for $ty {
                fn zero() -> Self {
                    $zero
                }

                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

zero_numbers!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
zero_numbers!(0.0 => f32, f64);

impl Zero for char {
    fn zero() -> Self {
        '\0'
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Zero for String {
    fn zero() -> Self {
        String::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for &str {
    fn zero() -> Self {
        ""
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for Cow<'_, str> {
    fn zero() -> Self {
        Cow::Borrowed("")
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for Duration {
    fn zero() -> Self {
        Duration::ZERO
    }

    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

/// `None` is the zero value, whatever the payload.
impl<T> Zero for Option<T> {
    fn zero() -> Self {
        None
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}
