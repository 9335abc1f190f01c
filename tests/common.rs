//! Integration tests for lexan-common crate.

use lexan_common::{Location, Pos, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_len() {
    assert_eq!(Span::from_usize(5, 15).len(), 10);
    assert_eq!(Span::single(7).len(), 1);
}

#[test]
fn test_span_is_empty() {
    assert!(Span::from_usize(5, 5).is_empty());
    assert!(!Span::single(5).is_empty());
}

#[test]
fn test_span_contains() {
    let span = Span::from_usize(2, 4);
    assert!(!span.contains(Pos(1)));
    assert!(span.contains(Pos(2)));
    assert!(span.contains(Pos(3)));
    assert!(!span.contains(Pos(4)));
}

#[test]
fn test_span_serializes_as_offsets() {
    let json = serde_json::to_string(&Span::from_usize(3, 8)).unwrap();
    assert_eq!(json, r#"{"start":3,"end":8}"#);
}

#[test]
fn test_location_display() {
    assert_eq!(Location::new(2, 5).to_string(), "line 2, index 5");
    assert_eq!(Location::default(), Location::START);
}

#[test]
fn test_location_ordering() {
    assert!(Location::new(1, 9) < Location::new(2, 0));
    assert!(Location::new(2, 1) < Location::new(2, 3));
}
