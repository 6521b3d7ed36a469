//! Tests for `#[derive(Classify)]`.

#![cfg(feature = "derive")]

use std::collections::HashMap;

use coalesce::{any, position, Classify, Shape};

#[derive(Classify)]
struct Endpoint {
    host: String,
    port: u16,
    #[classify(skip)]
    retries: u8,
}

#[derive(Classify)]
struct Count(i32);

#[derive(Classify)]
struct Label(String);

#[derive(Classify)]
#[classify(transparent)]
struct Tags(Vec<String>);

#[derive(Classify)]
#[classify(transparent)]
struct Lookup {
    entries: HashMap<String, u32>,
}

#[derive(Classify)]
struct Marker;

#[derive(Classify)]
struct Digest {
    bytes: [u8; 4],
}

#[derive(Classify)]
struct Grid([[i32; 2]; 2]);

#[derive(Debug, Default, PartialEq, Classify)]
#[classify(default)]
enum Level {
    #[default]
    Off,
    Low,
}

#[derive(Debug, Default, PartialEq, Classify)]
#[classify(default)]
struct Limits {
    max: u32,
    ratio: f64,
}

#[derive(Classify)]
struct Wrapper<T> {
    inner: T,
}

#[test]
fn struct_with_zero_fields_is_empty() {
    let unset = Endpoint {
        host: String::new(),
        port: 0,
        retries: 3,
    };
    assert_eq!(unset.shape(), Shape::Scalar { zero: true });
    assert_eq!(unset.retries, 3);

    let set = Endpoint {
        host: String::new(),
        port: 8080,
        retries: 0,
    };
    assert!(!set.is_empty_value());
}

#[test]
fn named_scalar_types_follow_their_value() {
    assert!(Count(0).is_empty_value());
    assert!(!Count(-2).is_empty_value());
    assert!(Label(String::new()).is_empty_value());
    assert!(!Label("x".into()).is_empty_value());
}

#[test]
fn transparent_keeps_container_shape() {
    assert_eq!(Tags(vec![]).shape(), Shape::Container { len: 0 });
    assert_eq!(
        Tags(vec!["a".into(), "b".into()]).shape(),
        Shape::Container { len: 2 }
    );

    let lookup = Lookup {
        entries: HashMap::from([("k".to_string(), 0)]),
    };
    assert_eq!(lookup.shape(), Shape::Container { len: 1 });
}

#[test]
fn array_fields_are_checked_element_wise() {
    let unset = Digest { bytes: [0; 4] };
    assert_eq!(unset.shape(), Shape::Scalar { zero: true });
    assert!(!Digest { bytes: [0, 0, 7, 0] }.is_empty_value());

    assert!(Grid([[0; 2]; 2]).is_empty_value());
    assert!(!Grid([[0, 0], [0, -1]]).is_empty_value());
}

#[test]
fn unit_struct_is_empty() {
    assert!(Marker.is_empty_value());
}

#[test]
fn default_mode_compares_to_default() {
    assert!(Level::Off.is_empty_value());
    assert!(!Level::Low.is_empty_value());
    assert!(Limits::default().is_empty_value());
    assert!(!Limits { max: 0, ratio: 0.5 }.is_empty_value());
}

#[test]
fn generic_struct() {
    assert!(Wrapper { inner: 0u8 }.is_empty_value());
    assert!(!Wrapper { inner: Some(0u8) }.is_empty_value());
}

#[test]
fn derived_types_in_any() {
    let empty_count = Count(0);
    let empty_tags = Tags(vec![]);
    let level = Level::Low;

    let candidates: [&dyn Classify; 3] = [&empty_count, &empty_tags, &level];
    assert_eq!(position(&candidates), Some(2));
    assert!(any(&candidates[..2]).is_none());
}
