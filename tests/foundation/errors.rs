//! Integration tests for Error types
//!
//! Tests error construction, display, context, and recoverability.

use gametable_foundation::{CellType, Error, ErrorContext, ErrorKind, KindRange};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_out_of_range_names_bounds() {
    let err = KindRange::new(1_000_000).check("id", 2_000_000).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::OutOfRange {
            what: "id",
            value: 2_000_000,
            min: 1_000_000,
            max: 1_999_999
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("1000000") && msg.contains("1999999"));
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(CellType::Int, "\"abc\"");
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { expected: CellType::Int, .. }));
    assert!(format!("{err}").contains("int"));
}

#[test]
fn error_not_loaded() {
    let err = Error::not_loaded("SpellData");
    assert!(format!("{err}").contains("SpellData"));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_appears_in_display() {
    let err = Error::malformed("inconsistent table width").with_context(
        ErrorContext::new()
            .with_table("buildings")
            .with_line(7)
            .with_column("Hitpoints"),
    );
    let msg = format!("{err}");
    assert!(msg.contains("buildings"));
    assert!(msg.contains('7'));
    assert!(msg.contains("Hitpoints"));
}

#[test]
fn error_without_context_has_no_suffix() {
    let err = Error::duplicate("id 1000000");
    assert_eq!(format!("{err}"), "duplicate identity: id 1000000");
}

// =============================================================================
// Recoverability
// =============================================================================

#[test]
fn local_errors_are_recoverable() {
    for err in [
        Error::invalid_argument("missing key"),
        Error::out_of_range("id", 5, 1_000_000, 1_999_999),
        Error::duplicate("level 0"),
        Error::already_locked("record"),
        Error::not_loaded("TrapData"),
        Error::not_found("Cannon"),
    ] {
        assert!(err.is_recoverable(), "{err}");
    }
}

#[test]
fn load_aborting_errors_are_not_recoverable() {
    assert!(!Error::malformed("ragged").is_recoverable());
    assert!(!Error::type_mismatch(CellType::Boolean, "\"maybe\"").is_recoverable());
    assert!(!Error::new(ErrorKind::Internal("bug".into())).is_recoverable());
}
