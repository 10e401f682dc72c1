//! Typed table model and header parsing for gametable.
//!
//! This crate provides:
//! - [`Table`] - Columns with declared types plus typed data rows
//! - [`Row`] - One data row of [`Value`](gametable_foundation::Value) cells
//! - [`RowSource`] - The interface a tokenizer implements to feed string rows
//! - [`TableOptions`] - Header and cell parsing switches

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod source;
pub mod table;

pub use source::{RowSource, VecSource};
pub use table::{Column, Row, Table, TableOptions};
