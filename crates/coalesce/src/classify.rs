//! The [`Classify`] trait and its implementations for standard types.
//!
//! Implementations fall into three groups, one per [`Kind`](crate::Kind):
//!
//! | Kind | Types | Empty when |
//! |------|-------|------------|
//! | Scalar | integers, floats, `bool`, `char`, `String`, `&str`, `Cow<str>`, `Duration` | equal to the zero value |
//! | Reference | `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>`, `NonNull<T>`, raw pointers | null / `None` |
//! | Container | `Vec`, arrays, slices, `VecDeque`, `LinkedList`, `BinaryHeap`, maps, sets | no elements |
//!
//! [`Nil`] and `()` have no type information and are always empty.
//!
//! User types get an implementation from `#[derive(Classify)]` or by writing
//! one by hand.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::shape::Shape;

/// Types whose emptiness can be judged at runtime.
///
/// This is the capability the generic [`any`](crate::any) variant dispatches
/// on. It is object safe, so heterogeneous candidates can be passed as
/// `&dyn Classify`.
///
/// # Manual Implementation
///
/// ```
/// use coalesce::{Classify, Shape};
///
/// struct Inbox {
///     messages: Vec<String>,
/// }
///
/// impl Classify for Inbox {
///     fn shape(&self) -> Shape {
///         Shape::Container { len: self.messages.len() }
///     }
/// }
///
/// assert!(Inbox { messages: vec![] }.is_empty_value());
/// ```
pub trait Classify {
    /// Reports the shape of this value.
    fn shape(&self) -> Shape;

    /// Returns `true` if this value counts as empty.
    fn is_empty_value(&self) -> bool {
        self.shape().is_empty()
    }
}

/// The untyped absent value.
///
/// Use it where a candidate list needs a placeholder that carries no type at
/// all. It is always empty.
///
/// ```
/// use coalesce::{any, Nil};
///
/// assert!(any(&[&Nil]).is_none());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nil;

impl Classify for Nil {
    fn shape(&self) -> Shape {
        Shape::Untyped
    }
}

impl Classify for () {
    fn shape(&self) -> Shape {
        Shape::Untyped
    }
}

// ============================================================================
// Scalars
// ============================================================================

macro_rules! classify_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classify for $ty {
                fn shape(&self) -> Shape {
                    Shape::Scalar { zero: *self == 0 }
                }
            }
        )*
    };
}

classify_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Bit comparison: -0.0 is not the zero value here, NaN never is.
impl Classify for f32 {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: self.to_bits() == 0,
        }
    }
}

impl Classify for f64 {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: self.to_bits() == 0,
        }
    }
}

impl Classify for bool {
    fn shape(&self) -> Shape {
        Shape::Scalar { zero: !*self }
    }
}

impl Classify for char {
    fn shape(&self) -> Shape {
        Shape::Scalar { zero: *self == '\0' }
    }
}

impl Classify for String {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: self.is_empty(),
        }
    }
}

impl Classify for &str {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: self.is_empty(),
        }
    }
}

impl Classify for Cow<'_, str> {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: self.is_empty(),
        }
    }
}

impl Classify for Duration {
    fn shape(&self) -> Shape {
        Shape::Scalar {
            zero: self.is_zero(),
        }
    }
}

// ============================================================================
// References
// ============================================================================

impl<T> Classify for Option<T> {
    fn shape(&self) -> Shape {
        Shape::Reference {
            null: self.is_none(),
        }
    }
}

macro_rules! classify_non_null {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> Classify for $ptr<T> {
                fn shape(&self) -> Shape {
                    Shape::Reference { null: false }
                }
            }
        )*
    };
}

classify_non_null!(Box, Rc, Arc, NonNull);

impl<T: ?Sized> Classify for *const T {
    fn shape(&self) -> Shape {
        Shape::Reference {
            null: self.is_null(),
        }
    }
}

impl<T: ?Sized> Classify for *mut T {
    fn shape(&self) -> Shape {
        Shape::Reference {
            null: self.is_null(),
        }
    }
}

// ============================================================================
// Containers
// ============================================================================

macro_rules! classify_containers {
    ($($ty:ty => [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<$($gen)*> Classify for $ty {
                fn shape(&self) -> Shape {
                    Shape::Container { len: self.len() }
                }
            }
        )*
    };
}

classify_containers!(
    Vec<T> => [T],
    VecDeque<T> => [T],
    LinkedList<T> => [T],
    BinaryHeap<T> => [T],
    BTreeSet<T> => [T],
    BTreeMap<K, V> => [K, V],
    HashSet<T, S> => [T, S],
    HashMap<K, V, S> => [K, V, S],
    &[T] => [T],
);

impl<T, const N: usize> Classify for [T; N] {
    fn shape(&self) -> Shape {
        Shape::Container { len: N }
    }
}
