//! Integration tests for Table construction from split rows

use gametable_foundation::{CellType, ErrorKind, Value};
use gametable_table::{Table, TableOptions};

fn buildings() -> Table {
    Table::from_raw(
        "buildings",
        &["Name", "Hitpoints", "Passable"],
        &["string", "int", "boolean"],
        &[vec!["Wall", "300", "false"], vec!["", "", "TRUE"]],
    )
    .unwrap()
}

// =============================================================================
// Headers
// =============================================================================

#[test]
fn columns_carry_names_and_types() {
    let table = buildings();
    let types: Vec<_> = table.columns().iter().map(|c| c.ty).collect();
    assert_eq!(types, vec![CellType::String, CellType::Int, CellType::Boolean]);
    assert_eq!(table.column_index("Passable"), Some(2));
    assert!(table.has_column("Hitpoints"));
    assert!(!table.has_column("hitpoints"));
    assert_eq!(table.width(), 3);
}

#[test]
fn unknown_declared_type_is_malformed() {
    let err = Table::header_only("spells", &["Name", "Radius"], &["string", "float"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTable(ref m) if m.contains("float")));
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(2));
    assert_eq!(context.column.as_deref(), Some("Radius"));
}

#[test]
fn header_width_mismatch_is_malformed() {
    let err = Table::header_only("t", &["Name", "Cost"], &["string"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTable(_)));
}

#[test]
fn exact_type_matching_rejects_capitalized() {
    let options = TableOptions::default().with_case_insensitive_types(false);
    let rows: [Vec<&str>; 0] = [];
    assert!(Table::from_raw_with("t", &["Name"], &["String"], &rows, options).is_err());
    assert!(Table::from_raw_with("t", &["Name"], &["string"], &rows, options).is_ok());
}

#[test]
fn duplicate_column_keeps_first_for_lookup() {
    let table = Table::header_only("t", &["Name", "Cost", "Cost"], &["string", "int", "string"]).unwrap();
    assert_eq!(table.column_index("Cost"), Some(1));
    assert_eq!(table.width(), 3);
}

#[test]
fn header_only_table_is_empty() {
    let table = Table::header_only("decos", &["Name"], &["string"]).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

// =============================================================================
// Rows
// =============================================================================

#[test]
fn cells_are_typed_and_empty_marked() {
    let table = buildings();
    let child = &table.rows()[1];
    assert_eq!(child.cell(0), Some(&Value::Empty));
    assert_eq!(child.get(&table, "Hitpoints"), Some(&Value::Empty));
    assert_eq!(child.get(&table, "Passable"), Some(&Value::Bool(true)));
    assert_eq!(table.rows()[0].get(&table, "Hitpoints"), Some(&Value::Int(300)));
}

#[test]
fn lines_count_header_rows() {
    let table = buildings();
    assert_eq!(table.rows()[0].line(), 3);
    assert_eq!(table.rows()[1].line(), 4);
}

#[test]
fn ragged_row_is_malformed_with_line() {
    let err = Table::from_raw(
        "traps",
        &["Name", "Damage"],
        &["string", "int"],
        &[vec!["Bomb", "20"], vec!["Spring"]],
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTable(_)));
    assert_eq!(err.context.and_then(|c| c.line), Some(4));
}

#[test]
fn bad_literal_is_malformed_with_column() {
    let err = Table::from_raw("traps", &["Name", "Damage"], &["string", "int"], &[vec!["Bomb", "lots"]])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTable(_)));
    assert_eq!(err.context.and_then(|c| c.column).as_deref(), Some("Damage"));
}

#[test]
fn trimming_is_opt_in() {
    let rows = [vec!["Bomb", " 20 "]];
    let trimmed = Table::from_raw_with(
        "traps",
        &["Name", "Damage"],
        &["string", "int"],
        &rows,
        TableOptions::default().with_trim_cells(true),
    )
    .unwrap();
    assert_eq!(trimmed.rows()[0].cell(1), Some(&Value::Int(20)));

    let names = ["Name", "Note"];
    let types = ["string", "string"];
    let raw = Table::from_raw("t", &names, &types, &[vec!["Bomb", " x "]]).unwrap();
    assert_eq!(raw.rows()[0].cell(1), Some(&Value::from(" x ")));
}
