//! Integration tests for KindRange

use gametable_foundation::{ErrorKind, KindRange, MAX_INDEX};

#[test]
fn range_spans_one_million_ids() {
    let range = KindRange::new(1_000_000);
    assert_eq!(range.min(), 1_000_000);
    assert_eq!(range.max(), 1_000_000 + MAX_INDEX);
    assert!(range.contains(1_000_000));
    assert!(range.contains(1_999_999));
    assert!(!range.contains(999_999));
    assert!(!range.contains(2_000_000));
}

#[test]
fn index_and_id_convert_both_ways() {
    let range = KindRange::new(12_000_000);
    assert_eq!(range.index_of(12_000_042).unwrap(), 42);
    assert_eq!(range.id_at(42).unwrap(), 12_000_042);
}

#[test]
fn index_past_max_is_out_of_range() {
    let range = KindRange::new(4_000_000);
    let err = range.id_at(1_000_000).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfRange { what: "index", .. }));
    assert!(range.index_of(3_999_999).is_err());
}

#[test]
fn display_shows_bounds() {
    assert_eq!(KindRange::new(8_000_000).to_string(), "[8000000, 8999999]");
}
