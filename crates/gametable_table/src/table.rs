//! Typed tables built from pre-split string rows.
//!
//! A data table starts with two header rows: column names, then declared
//! column types. Every following row holds one cell per column. Cells that
//! were empty in the source become [`Value::Empty`].

use std::collections::HashMap;
use std::sync::Arc;

use gametable_foundation::{CellType, Error, ErrorContext, Result, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::source::RowSource;

/// Number of header rows preceding the data rows.
const HEADER_ROWS: usize = 2;

/// Parsing switches for [`Table`] construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Trim surrounding whitespace from every data cell before parsing.
    pub trim_cells: bool,
    /// Accept declared types in any letter case (`Int`, `BOOLEAN`).
    pub case_insensitive_types: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            trim_cells: false,
            case_insensitive_types: true,
        }
    }
}

impl TableOptions {
    /// Builder method to set cell trimming.
    #[must_use]
    pub fn with_trim_cells(mut self, trim: bool) -> Self {
        self.trim_cells = trim;
        self
    }

    /// Builder method to set declared-type case sensitivity.
    #[must_use]
    pub fn with_case_insensitive_types(mut self, insensitive: bool) -> Self {
        self.case_insensitive_types = insensitive;
        self
    }

    fn parse_type(self, declared: &str) -> Option<CellType> {
        if self.case_insensitive_types {
            CellType::parse(declared)
        } else {
            CellType::parse_exact(declared)
        }
    }
}

/// A named, typed column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    /// Column name from the first header row.
    pub name: Arc<str>,
    /// Declared type from the second header row.
    pub ty: CellType,
}

/// One data row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    cells: Vec<Value>,
    line: usize,
}

impl Row {
    /// Returns the cell at `index`, if the row is that wide.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }

    /// Returns the cell in the column named `column`.
    #[must_use]
    pub fn get<'a>(&'a self, table: &Table, column: &str) -> Option<&'a Value> {
        table.column_index(column).and_then(|i| self.cell(i))
    }

    /// Returns all cells in column order.
    #[must_use]
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Returns the 1-based source line (header rows included).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

/// A typed data table.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    /// Column name to first column index carrying that name.
    index: HashMap<Arc<str>, usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from its two header rows and already-split data rows.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` if the header rows differ in width, a
    /// declared type is unsupported, a data row has the wrong number of
    /// cells, or a cell is not a valid literal of its column type.
    pub fn from_raw<S, R>(name: impl Into<String>, names: &[S], types: &[S], rows: &[R]) -> Result<Self>
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        Self::from_raw_with(name, names, types, rows, TableOptions::default())
    }

    /// Like [`Table::from_raw`], with explicit parsing options.
    ///
    /// # Errors
    ///
    /// See [`Table::from_raw`].
    pub fn from_raw_with<S, R>(
        name: impl Into<String>,
        names: &[S],
        types: &[S],
        rows: &[R],
        options: TableOptions,
    ) -> Result<Self>
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        let mut table = Self::header_with(name, names, types, options)?;
        for (i, row) in rows.iter().enumerate() {
            table.push_raw_row(row.as_ref(), HEADER_ROWS + i + 1, options)?;
        }
        tracing::debug!(
            table = %table.name,
            columns = table.columns.len(),
            rows = table.rows.len(),
            "parsed table"
        );
        Ok(table)
    }

    /// Builds a table with header rows only.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` for invalid header declarations.
    pub fn header_only<S: AsRef<str>>(name: impl Into<String>, names: &[S], types: &[S]) -> Result<Self> {
        Self::header_with(name, names, types, TableOptions::default())
    }

    /// Pulls the header rows and every data row out of `source`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` if the source yields fewer than two rows or
    /// any row is invalid, and propagates errors from the source itself.
    pub fn from_source<R: RowSource + ?Sized>(
        name: impl Into<String>,
        source: &mut R,
        options: TableOptions,
    ) -> Result<Self> {
        let name = name.into();
        let names = source.next_row()?.ok_or_else(|| {
            Error::malformed("missing column names row")
                .with_context(ErrorContext::new().with_table(name.clone()).with_line(1))
        })?;
        let types = source.next_row()?.ok_or_else(|| {
            Error::malformed("missing column types row")
                .with_context(ErrorContext::new().with_table(name.clone()).with_line(2))
        })?;

        let mut table = Self::header_with(name, &names, &types, options)?;
        let mut line = HEADER_ROWS;
        while let Some(row) = source.next_row()? {
            line += 1;
            table.push_raw_row(&row, line, options)?;
        }
        tracing::debug!(
            table = %table.name,
            columns = table.columns.len(),
            rows = table.rows.len(),
            "parsed table from source"
        );
        Ok(table)
    }

    fn header_with<S: AsRef<str>>(
        name: impl Into<String>,
        names: &[S],
        types: &[S],
        options: TableOptions,
    ) -> Result<Self> {
        let name = name.into();
        if names.len() != types.len() {
            return Err(Error::malformed(format!(
                "header rows differ in width: {} names, {} types",
                names.len(),
                types.len()
            ))
            .with_context(ErrorContext::new().with_table(name).with_line(HEADER_ROWS)));
        }

        let mut columns = Vec::with_capacity(names.len());
        let mut index = HashMap::with_capacity(names.len());
        for (i, (column, declared)) in names.iter().zip(types).enumerate() {
            let column = column.as_ref();
            let declared = declared.as_ref();
            let ty = options.parse_type(declared).ok_or_else(|| {
                Error::malformed(format!(
                    "unexpected data type '{declared}' at row {HEADER_ROWS}, column {}",
                    i + 1
                ))
                .with_context(
                    ErrorContext::new()
                        .with_table(name.clone())
                        .with_line(HEADER_ROWS)
                        .with_column(column),
                )
            })?;

            let column: Arc<str> = Arc::from(column);
            if index.contains_key(&column) {
                tracing::warn!(table = %name, column = %column, "duplicate column name");
            } else {
                index.insert(Arc::clone(&column), i);
            }
            columns.push(Column { name: column, ty });
        }

        Ok(Self {
            name,
            columns,
            index,
            rows: Vec::new(),
        })
    }

    fn push_raw_row<S: AsRef<str>>(&mut self, raw: &[S], line: usize, options: TableOptions) -> Result<()> {
        if raw.len() != self.columns.len() {
            return Err(Error::malformed(format!(
                "inconsistent table width: expected {} cells, found {}",
                self.columns.len(),
                raw.len()
            ))
            .with_context(ErrorContext::new().with_table(self.name.clone()).with_line(line)));
        }

        let mut cells = Vec::with_capacity(raw.len());
        for (column, text) in self.columns.iter().zip(raw) {
            let text = if options.trim_cells {
                text.as_ref().trim()
            } else {
                text.as_ref()
            };
            let value = Value::parse(text, column.ty).ok_or_else(|| {
                Error::malformed(format!("'{text}' is not a valid {} cell", column.ty)).with_context(
                    ErrorContext::new()
                        .with_table(self.name.clone())
                        .with_line(line)
                        .with_column(&*column.name),
                )
            })?;
            cells.push(value);
        }
        self.rows.push(Row { cells, line });
        Ok(())
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the columns in header order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the index of the first column named `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the first column named `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Returns true if a column named `name` exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the data rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
