//! Core cell values, identity ranges, and errors for gametable.
//!
//! This crate provides:
//! - [`Value`] - A single typed table cell, including the empty marker
//! - [`CellType`] - Declared column types (`string`, `int`, `boolean`)
//! - [`KindRange`] - The valid ID span of one data kind
//! - [`Error`] - Rich error types with table/row/column context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod range;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use range::{KindRange, MAX_INDEX};
pub use value::{CellType, Value};
