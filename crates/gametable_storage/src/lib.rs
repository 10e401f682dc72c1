//! Record collections for gametable.
//!
//! This crate provides:
//! - [`DataRecord`] and [`RecordMeta`]: the identity every record carries
//! - [`LevelCollection`]: the levels of one entity, indexed by level
//! - [`EntityCollection`]: all entities of one kind, indexed by ID
//!
//! A record placed into a collection is locked: its identity can no longer
//! change, and it cannot be placed into a second collection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod level;
pub mod record;
mod sparse;

pub use entity::EntityCollection;
pub use level::LevelCollection;
pub use record::{DataRecord, RecordMeta};
