//! Runtime shape of a candidate value.
//!
//! The [`Shape`] enum is what a [`Classify`](crate::Classify) implementation
//! reports about a single value. It is a closed set: every value is either
//! untyped, a scalar, a reference, or a container, and each variant carries
//! exactly the information its emptiness rule needs.

/// The kind of a typed value, without the data needed to judge emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Numbers, text, booleans, durations, timestamps, plain structs.
    Scalar,
    /// Nullable indirections: `Option`, smart pointers, raw pointers.
    Reference,
    /// Sequences, sets, maps, queues.
    Container,
}

impl Kind {
    /// Returns the lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Scalar => "scalar",
            Kind::Reference => "reference",
            Kind::Container => "container",
        }
    }
}

/// Classification of a single value.
///
/// # Example
///
/// ```
/// use coalesce::Shape;
///
/// assert!(Shape::Container { len: 0 }.is_empty());
/// assert!(!Shape::Reference { null: false }.is_empty());
/// assert!(Shape::Untyped.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No type information at all. Always empty.
    Untyped,
    /// A value compared against its type's zero value.
    Scalar {
        /// Whether the value equals the zero value of its type.
        zero: bool,
    },
    /// A nullable reference. The pointee is never inspected.
    Reference {
        /// Whether the reference is absent.
        null: bool,
    },
    /// A collection judged by its element count.
    Container {
        /// Number of elements.
        len: usize,
    },
}

impl Shape {
    /// Returns `true` if a value with this shape counts as empty.
    pub fn is_empty(self) -> bool {
        match self {
            Shape::Untyped => true,
            Shape::Scalar { zero } => zero,
            Shape::Reference { null } => null,
            Shape::Container { len } => len == 0,
        }
    }

    /// Returns the kind of this shape, or `None` for [`Shape::Untyped`].
    pub fn kind(self) -> Option<Kind> {
        match self {
            Shape::Untyped => None,
            Shape::Scalar { .. } => Some(Kind::Scalar),
            Shape::Reference { .. } => Some(Kind::Reference),
            Shape::Container { .. } => Some(Kind::Container),
        }
    }
}
