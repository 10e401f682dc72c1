//! Gametable - hierarchical game-data tables
//!
//! This crate re-exports all layers of the gametable system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: gametable_assets     - Data models, DataStore, SharedDataStore
//! Layer 3: gametable_codec      - Field maps, hierarchical deserialization
//! Layer 2: gametable_storage    - Level and entity collections, record identity
//! Layer 1: gametable_table      - Typed tables, columns, rows
//! Layer 0: gametable_foundation - Core types (Value, CellType, KindRange, Error)
//! ```

pub use gametable_assets as assets;
pub use gametable_codec as codec;
pub use gametable_foundation as foundation;
pub use gametable_storage as storage;
pub use gametable_table as table;
