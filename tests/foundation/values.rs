//! Integration tests for Value and CellType

use gametable_foundation::{CellType, Value};

// =============================================================================
// Cell Types
// =============================================================================

#[test]
fn cell_types_parse_any_case() {
    assert_eq!(CellType::parse("Int"), Some(CellType::Int));
    assert_eq!(CellType::parse(" BOOLEAN "), Some(CellType::Boolean));
    assert_eq!(CellType::parse("string"), Some(CellType::String));
    assert_eq!(CellType::parse("float"), None);
    assert_eq!(CellType::parse_exact("Int"), None);
}

#[test]
fn zero_values_per_type() {
    assert_eq!(CellType::Int.zero(), Value::Int(0));
    assert_eq!(CellType::Boolean.zero(), Value::Bool(false));
    assert_eq!(CellType::String.zero(), Value::Empty);
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn empty_cell_is_empty_for_every_type() {
    for ty in [CellType::String, CellType::Int, CellType::Boolean] {
        assert_eq!(Value::parse("", ty), Some(Value::Empty));
    }
}

#[test]
fn literals_parse_by_type() {
    assert_eq!(Value::parse("-12", CellType::Int), Some(Value::Int(-12)));
    assert_eq!(Value::parse("True", CellType::Boolean), Some(Value::Bool(true)));
    assert_eq!(Value::parse("Cannon", CellType::String), Some(Value::from("Cannon")));
    assert_eq!(Value::parse("12.5", CellType::Int), None);
    assert_eq!(Value::parse("yes", CellType::Boolean), None);
}

// =============================================================================
// Zero and Coercion
// =============================================================================

#[test]
fn zero_detection() {
    assert!(Value::Int(0).is_zero_for(CellType::Int));
    assert!(Value::Bool(false).is_zero_for(CellType::Boolean));
    assert!(Value::Empty.is_zero_for(CellType::String));
    assert!(!Value::Int(1).is_zero_for(CellType::Int));
    assert!(!Value::from("").is_zero_for(CellType::Int));
}

#[test]
fn coercion_between_types() {
    assert_eq!(Value::from("42").coerce(CellType::Int), Some(Value::Int(42)));
    assert_eq!(Value::Int(7).coerce(CellType::String), Some(Value::from("7")));
    assert_eq!(Value::from("false").coerce(CellType::Boolean), Some(Value::Bool(false)));
    assert_eq!(Value::Bool(true).coerce(CellType::Int), Some(Value::Int(1)));
    assert_eq!(Value::Int(2).coerce(CellType::Boolean), None);
    assert_eq!(Value::Empty.coerce(CellType::Int), Some(Value::Empty));
}
