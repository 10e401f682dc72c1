//! Integration tests for RowSource-driven table construction

use gametable_foundation::{Error, ErrorKind, Result, Value};
use gametable_table::{RowSource, Table, TableOptions, VecSource};

#[test]
fn vec_source_feeds_headers_then_rows() {
    let mut source: VecSource = vec![
        vec!["Name", "Damage"],
        vec!["string", "int"],
        vec!["Bomb", "24"],
        vec!["", "30"],
    ]
    .into_iter()
    .collect();
    assert_eq!(source.remaining(), 4);

    let table = Table::from_source("traps", &mut source, TableOptions::default()).unwrap();
    assert_eq!(source.remaining(), 0);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[1].get(&table, "Damage"), Some(&Value::Int(30)));
}

#[test]
fn source_without_types_row_is_malformed() {
    let mut source = VecSource::new(vec![vec!["Name".to_string()]]);
    let err = Table::from_source("t", &mut source, TableOptions::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTable(_)));
    assert_eq!(err.context.and_then(|c| c.line), Some(2));
}

#[test]
fn empty_source_is_malformed() {
    let mut source = VecSource::default();
    assert!(Table::from_source("t", &mut source, TableOptions::default()).is_err());
}

struct FailingSource {
    rows: Vec<Vec<String>>,
}

impl RowSource for FailingSource {
    fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        if self.rows.is_empty() {
            Err(Error::invalid_argument("stream truncated"))
        } else {
            Ok(Some(self.rows.remove(0)))
        }
    }
}

#[test]
fn source_errors_propagate() {
    let mut source = FailingSource {
        rows: vec![vec!["Name".into()], vec!["string".into()]],
    };
    let err = Table::from_source("t", &mut source, TableOptions::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}
