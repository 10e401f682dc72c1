//! Typed cell values and declared column types.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declared type of a table column.
///
/// The second header row of a data table names one of these per column.
/// Field descriptors reuse it to describe the type a record field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellType {
    /// Free text.
    String,
    /// 32-bit signed integer.
    Int,
    /// `true` / `false`.
    Boolean,
}

impl CellType {
    /// Parses a declared column type.
    ///
    /// Matching is case-insensitive; surrounding whitespace is ignored.
    /// Returns `None` for anything outside `string`, `int`, and `boolean`.
    #[must_use]
    pub fn parse(declared: &str) -> Option<Self> {
        let declared = declared.trim();
        if declared.eq_ignore_ascii_case("string") {
            Some(Self::String)
        } else if declared.eq_ignore_ascii_case("int") {
            Some(Self::Int)
        } else if declared.eq_ignore_ascii_case("boolean") {
            Some(Self::Boolean)
        } else {
            None
        }
    }

    /// Parses a declared column type, matching case exactly.
    #[must_use]
    pub fn parse_exact(declared: &str) -> Option<Self> {
        match declared {
            "string" => Some(Self::String),
            "int" => Some(Self::Int),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// Returns the lowercase name used in table headers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Boolean => "boolean",
        }
    }

    /// Returns the zero value a freshly constructed field of this type holds.
    ///
    /// Strings have no zero value besides absence, so they map to
    /// [`Value::Empty`].
    #[must_use]
    pub const fn zero(self) -> Value {
        match self {
            Self::String => Value::Empty,
            Self::Int => Value::Int(0),
            Self::Boolean => Value::Bool(false),
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single resolved table cell.
///
/// Values are immutable and cheap to clone; strings share their buffer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// The empty marker: the source cell was the empty string.
    #[default]
    Empty,
    /// Boolean cell.
    Bool(bool),
    /// Integer cell.
    Int(i32),
    /// Text cell.
    String(Arc<str>),
}

impl Value {
    /// Parses a raw source cell according to its column's declared type.
    ///
    /// An empty string always yields [`Value::Empty`]. Returns `None` when
    /// the text is not a valid literal of `ty`.
    #[must_use]
    pub fn parse(raw: &str, ty: CellType) -> Option<Self> {
        if raw.is_empty() {
            return Some(Self::Empty);
        }
        match ty {
            CellType::String => Some(Self::from(raw)),
            CellType::Int => raw.trim().parse::<i32>().ok().map(Self::Int),
            CellType::Boolean => parse_bool(raw).map(Self::Bool),
        }
    }

    /// Returns true if this is the empty marker.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if this value equals the zero value of `ty`.
    ///
    /// The empty marker counts as zero for every type.
    #[must_use]
    pub fn is_zero_for(&self, ty: CellType) -> bool {
        match (self, ty) {
            (Self::Empty, _) | (Self::Int(0), CellType::Int) | (Self::Bool(false), CellType::Boolean) => {
                true
            }
            _ => false,
        }
    }

    /// Returns the cell type this value carries, or `None` for the empty marker.
    #[must_use]
    pub const fn cell_type(&self) -> Option<CellType> {
        match self {
            Self::Empty => None,
            Self::Bool(_) => Some(CellType::Boolean),
            Self::Int(_) => Some(CellType::Int),
            Self::String(_) => Some(CellType::String),
        }
    }

    /// Converts this value to `ty`.
    ///
    /// Integers and booleans convert to and from their textual literals;
    /// the empty marker converts to itself. Returns `None` when the value
    /// has no representation in `ty`.
    #[must_use]
    pub fn coerce(&self, ty: CellType) -> Option<Self> {
        match (self, ty) {
            (Self::Empty, _) => Some(Self::Empty),
            (Self::Int(_), CellType::Int)
            | (Self::Bool(_), CellType::Boolean)
            | (Self::String(_), CellType::String) => Some(self.clone()),
            (Self::Int(n), CellType::String) => Some(Self::from(n.to_string())),
            (Self::Bool(b), CellType::String) => Some(Self::from(if *b { "true" } else { "false" })),
            (Self::String(s), CellType::Int) => s.trim().parse::<i32>().ok().map(Self::Int),
            (Self::String(s), CellType::Boolean) => parse_bool(s).map(Self::Bool),
            (Self::Int(n), CellType::Boolean) => match n {
                0 => Some(Self::Bool(false)),
                1 => Some(Self::Bool(true)),
                _ => None,
            },
            (Self::Bool(b), CellType::Int) => Some(Self::Int(i32::from(*b))),
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, or 0 for anything else.
    #[must_use]
    pub fn int_or_zero(&self) -> i32 {
        self.as_int().unwrap_or(0)
    }

    /// Returns the boolean, or `false` for anything else.
    #[must_use]
    pub fn bool_or_false(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::Empty, Self::from)
    }
}
