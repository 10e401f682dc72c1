//! Load configuration.

use gametable_storage::level::DEFAULT_LEVEL_CAPACITY;

/// What to do with data rows that appear before the first boundary row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrphanRows {
    /// Log a warning and drop the row.
    #[default]
    Skip,
    /// Fail the load with `MalformedTable`.
    Reject,
}

/// Configuration for a [`Deserializer`](crate::Deserializer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadConfig {
    /// Logical field name that marks entity boundaries.
    pub key_column: String,
    /// Handling of rows before the first boundary row.
    pub orphan_rows: OrphanRows,
    /// Level slots reserved per entity.
    pub level_capacity: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            key_column: "Name".to_string(),
            orphan_rows: OrphanRows::Skip,
            level_capacity: DEFAULT_LEVEL_CAPACITY,
        }
    }
}

impl LoadConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that rejects orphan rows.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_orphan_rows(OrphanRows::Reject)
    }

    /// Configuration that skips orphan rows.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default().with_orphan_rows(OrphanRows::Skip)
    }

    /// Builder method to set the boundary field.
    #[must_use]
    pub fn with_key_column(mut self, key_column: impl Into<String>) -> Self {
        self.key_column = key_column.into();
        self
    }

    /// Builder method to set orphan row handling.
    #[must_use]
    pub fn with_orphan_rows(mut self, orphan_rows: OrphanRows) -> Self {
        self.orphan_rows = orphan_rows;
        self
    }

    /// Builder method to set the per-entity level capacity.
    #[must_use]
    pub fn with_level_capacity(mut self, capacity: usize) -> Self {
        self.level_capacity = capacity;
        self
    }
}
