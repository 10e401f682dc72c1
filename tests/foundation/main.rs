//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, CellType, KindRange, and Error.

mod errors;
mod ranges;
mod values;
