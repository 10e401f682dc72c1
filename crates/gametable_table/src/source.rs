//! Row sources: the seam between a raw tokenizer and the typed table.
//!
//! The byte-level tokenizer (quoting, compression, encodings) lives outside
//! this crate. Anything that can hand over rows of string cells, header rows
//! first, can feed [`Table::from_source`](crate::Table::from_source).

use gametable_foundation::Result;

/// A supplier of pre-split string rows.
///
/// The first row yields column names, the second declared column types,
/// and every following row is data.
pub trait RowSource {
    /// Returns the next row, or `None` when the source is exhausted.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the underlying input fails.
    fn next_row(&mut self) -> Result<Option<Vec<String>>>;
}

/// An in-memory [`RowSource`] over rows that are already split.
#[derive(Clone, Debug, Default)]
pub struct VecSource {
    rows: std::vec::IntoIter<Vec<String>>,
}

impl VecSource {
    /// Creates a source yielding `rows` in order.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: rows.into_iter(),
        }
    }

    /// Returns the number of rows not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for VecSource {
    fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        Ok(self.rows.next())
    }
}

impl<S: AsRef<str>> FromIterator<Vec<S>> for VecSource {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|row| row.iter().map(|c| c.as_ref().to_owned()).collect())
                .collect(),
        )
    }
}
