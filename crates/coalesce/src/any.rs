//! The generic variant: the first non-empty value of any type.
//!
//! Candidates are passed as `&dyn Classify`, so a single call can mix
//! numbers, strings, references and collections. Each candidate is judged by
//! its own [`Shape`](crate::Shape):
//!
//! ```text
//! Untyped            -> empty
//! Container { len }  -> empty iff len == 0
//! Reference { null } -> empty iff null (the pointee is never inspected)
//! Scalar { zero }    -> empty iff zero
//! ```

use tracing::trace;

use crate::classify::Classify;

/// Returns the first candidate that is not empty, or `None`.
///
/// The returned reference is the element of `candidates` itself, not a copy.
/// It only exposes [`Classify`]; to get the concrete value back, use
/// [`position`] and index the original values.
///
/// # Example
///
/// ```
/// use coalesce::{any, position};
///
/// let empty: Vec<i32> = Vec::new();
/// let candidates: [&dyn coalesce::Classify; 4] = [&empty, &0, &"", &42];
///
/// assert!(any(&candidates).is_some());
/// assert_eq!(position(&candidates), Some(3));
/// ```
pub fn any<'a>(candidates: &[&'a dyn Classify]) -> Option<&'a dyn Classify> {
    position(candidates).map(|index| candidates[index])
}

/// Returns the index of the first candidate that is not empty.
///
/// The index maps back to the caller's own typed values:
///
/// ```
/// use coalesce::{position, Classify};
///
/// let names = [String::new(), String::from("ada"), String::from("grace")];
/// let candidates: Vec<&dyn Classify> = names.iter().map(|n| n as &dyn Classify).collect();
///
/// let winner = position(&candidates).map(|index| &names[index]);
/// assert_eq!(winner.map(String::as_str), Some("ada"));
/// ```
pub fn position(candidates: &[&dyn Classify]) -> Option<usize> {
    for (index, candidate) in candidates.iter().enumerate() {
        let shape = candidate.shape();
        if !shape.is_empty() {
            trace!(index, kind = ?shape.kind(), "selected candidate");
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Nil;
    use std::collections::HashMap;

    fn same(a: Option<&dyn Classify>, b: &dyn Classify) -> bool {
        a.is_some_and(|a| std::ptr::addr_eq(a, b))
    }

    #[test]
    fn skips_every_kind_of_empty() {
        let int_ptr: Option<&i32> = None;
        let map_ptr: Option<&HashMap<String, i32>> = None;
        let empty_map: HashMap<String, i32> = HashMap::new();
        let empty_vec: Vec<i32> = Vec::new();
        let one = "1";

        let candidates: [&dyn Classify; 8] =
            [&Nil, &int_ptr, &map_ptr, &empty_map, &empty_vec, &0, &"", &one];

        assert_eq!(position(&candidates), Some(7));
        assert!(same(any(&candidates), &one));
    }

    #[test]
    fn all_empty_is_none() {
        let text = String::new();
        let candidates: [&dyn Classify; 4] = [&Nil, &text, &0, &""];
        assert!(any(&candidates).is_none());
        assert!(any(&[&Nil]).is_none());
        assert!(any(&[]).is_none());
    }

    #[test]
    fn non_null_reference_wins_over_later_values() {
        let int_ptr: Option<&i32> = None;
        let map: HashMap<String, i32> = HashMap::new();
        let map_ptr = Some(&map);

        let candidates: [&dyn Classify; 3] = [&int_ptr, &map_ptr, &7];
        assert_eq!(position(&candidates), Some(1));
        assert!(same(any(&candidates), &map_ptr));
    }

    #[test]
    fn reference_to_zero_is_not_empty() {
        let zero = 0;
        let ptr = Some(&zero);
        let candidates: [&dyn Classify; 2] = [&ptr, &42];
        assert_eq!(position(&candidates), Some(0));
    }

    #[test]
    fn position_recovers_concrete_value() {
        let ports: [u16; 3] = [0, 8080, 9090];
        let label = "";
        let candidates: [&dyn Classify; 4] = [&label, &ports[0], &ports[1], &ports[2]];

        let index = position(&candidates).expect("a non-empty port");
        assert_eq!(index, 2);
        assert_eq!(ports[index - 1], 8080);
        assert!(same(any(&candidates), &ports[1]));
    }

    #[test]
    fn leftmost_wins() {
        let empty: Vec<i32> = Vec::new();
        let candidates: [&dyn Classify; 3] = [&empty, &1, &2];
        assert_eq!(position(&candidates), Some(1));
    }
}
