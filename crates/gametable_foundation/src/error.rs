//! Error types for gametable.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::value::CellType;

/// Result type for gametable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for gametable operations.
#[derive(Debug, Error)]
#[error("{kind}{}", context_suffix(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an out-of-range error naming the valid bounds.
    #[must_use]
    pub fn out_of_range(what: &'static str, value: i64, min: i32, max: i32) -> Self {
        Self::new(ErrorKind::OutOfRange {
            what,
            value,
            min,
            max,
        })
    }

    /// Creates a duplicate identity error.
    #[must_use]
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateIdentity(message.into()))
    }

    /// Creates an already-locked error.
    #[must_use]
    pub fn already_locked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyLocked(message.into()))
    }

    /// Creates a malformed table error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTable(message.into()))
    }

    /// Creates a type mismatch error for a cell that cannot convert to a field type.
    #[must_use]
    pub fn type_mismatch(expected: CellType, found: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected,
            found: found.into(),
        })
    }

    /// Creates a not-loaded error for a data kind.
    #[must_use]
    pub fn not_loaded(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotLoaded(kind.into()))
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound(message.into()))
    }

    /// Returns true if the caller can handle this error and carry on.
    ///
    /// Table-level failures abort the whole load and are not recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::MalformedTable(_) | ErrorKind::TypeMismatch { .. } | ErrorKind::Internal(_)
        )
    }
}

fn context_suffix(context: &Option<ErrorContext>) -> String {
    context
        .as_ref()
        .map(|c| format!(" ({c})"))
        .unwrap_or_default()
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required input was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An ID or level lies outside its valid span.
    #[error("{what} {value} out of range: must be between {min} and {max}")]
    OutOfRange {
        /// What was being validated (`id`, `index`).
        what: &'static str,
        /// The rejected value.
        value: i64,
        /// Lowest valid value.
        min: i32,
        /// Highest valid value.
        max: i32,
    },

    /// A record or collection with the same key already exists.
    #[error("duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// A locked record or sealed collection was modified.
    #[error("already locked: {0}")]
    AlreadyLocked(String),

    /// Header declarations or row widths are invalid.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// A cell value cannot be converted to the field's type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The field type.
        expected: CellType,
        /// Description of the offending value.
        found: String,
    },

    /// A search ran against a data kind that was never loaded.
    #[error("data kind not loaded: {0}")]
    NotLoaded(String),

    /// A key or level combination is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Table name.
    pub table: Option<String>,
    /// Source line (1-indexed, header rows included).
    pub line: Option<usize>,
    /// Column name.
    pub column: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the source line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the column name.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(table) = &self.table {
            write!(f, "in {table}")?;
            sep = ", ";
        }
        if let Some(line) = self.line {
            write!(f, "{sep}line {line}")?;
            sep = ", ";
        }
        if let Some(column) = &self.column {
            write!(f, "{sep}column {column}")?;
        }
        Ok(())
    }
}
