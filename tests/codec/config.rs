//! Integration tests for load configuration

use gametable_codec::{Deserializer, LoadConfig, OrphanRows};
use gametable_foundation::ErrorKind;
use gametable_table::Table;

use crate::Defense;

fn with_orphans() -> Table {
    Table::from_raw(
        "buildings",
        &["Name", "Cost"],
        &["string", "int"],
        &[vec!["", "5"], vec!["", "6"], vec!["Cannon", "50"]],
    )
    .unwrap()
}

#[test]
fn orphan_rows_are_skipped_by_default() {
    let (entities, report) = Deserializer::default()
        .deserialize_with_report::<Defense>(&with_orphans())
        .unwrap();
    assert_eq!(report.orphan_rows, 2);
    assert_eq!(report.entities, 1);
    assert_eq!(entities.get_by_key("Cannon").unwrap().len(), 1);
}

#[test]
fn strict_config_rejects_orphan_rows() {
    let err = Deserializer::new(LoadConfig::strict())
        .deserialize::<Defense>(&with_orphans())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTable(_)));
    assert_eq!(err.context.and_then(|c| c.line), Some(3));
}

#[test]
fn custom_key_column_marks_boundaries() {
    let table = Table::from_raw(
        "buildings",
        &["Name", "SWF"],
        &["string", "string"],
        &[vec!["Cannon", "a.sc"], vec!["", "b.sc"], vec!["", ""]],
    )
    .unwrap();
    let deserializer = Deserializer::new(LoadConfig::default().with_key_column("ExportName"));
    let entities = deserializer.deserialize::<Defense>(&table).unwrap();
    assert_eq!(entities.len(), 2);
    assert!(entities.contains_key("a.sc"));
    assert_eq!(entities.get_by_key("b.sc").unwrap().len(), 2);
}

#[test]
fn unknown_key_field_is_invalid_argument() {
    let deserializer = Deserializer::new(LoadConfig::default().with_key_column("TID"));
    let err = deserializer.deserialize::<Defense>(&with_orphans()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

#[test]
fn level_capacity_does_not_change_results() {
    let small = Deserializer::new(LoadConfig::lenient().with_level_capacity(1))
        .deserialize::<Defense>(&with_orphans())
        .unwrap();
    assert_eq!(small.record_count(), 1);
    assert_eq!(LoadConfig::lenient().orphan_rows, OrphanRows::Skip);
}
