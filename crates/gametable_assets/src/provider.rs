//! Table sources for the data store.
//!
//! Reading and decompressing table files is outside this crate. Whatever
//! does it implements [`TableProvider`] and hands back parsed tables.

use std::collections::{BTreeMap, HashMap};

use gametable_foundation::Result;
use gametable_table::Table;

/// Supplies parsed tables by path.
pub trait TableProvider {
    /// Returns the table stored at `path`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Implementations report read and parse failures.
    fn table(&self, path: &str) -> Result<Option<Table>>;
}

impl TableProvider for HashMap<String, Table> {
    fn table(&self, path: &str) -> Result<Option<Table>> {
        Ok(self.get(path).cloned())
    }
}

impl TableProvider for BTreeMap<String, Table> {
    fn table(&self, path: &str) -> Result<Option<Table>> {
        Ok(self.get(path).cloned())
    }
}
