//! Integration tests for Layer 1: Table
//!
//! Tests header parsing, typed rows, and row sources.

mod parsing;
mod sources;
