//! Field mapping and hierarchical deserialization for gametable.
//!
//! This crate turns a [`Table`](gametable_table::Table) into an
//! [`EntityCollection`](gametable_storage::EntityCollection):
//! - [`FieldMap`] describes how columns project onto a record type
//! - [`FieldMapper`] caches one field map per type
//! - [`Deserializer`] walks rows, resolves blank cells from the entity's
//!   boundary row, and groups records into entities and levels
//!
//! # Example
//!
//! ```
//! use gametable_codec::{deserialize, FieldMap, Mapped};
//! use gametable_foundation::{CellType, Value};
//! use gametable_storage::{DataRecord, RecordMeta};
//! use gametable_table::Table;
//!
//! #[derive(Debug, Default)]
//! struct Wall {
//!     meta: RecordMeta,
//!     name: String,
//!     hitpoints: i32,
//! }
//!
//! impl DataRecord for Wall {
//!     const BASE_ID: i32 = 1_000_000;
//!     const KIND: &'static str = "Wall";
//!     fn meta(&self) -> &RecordMeta { &self.meta }
//!     fn meta_mut(&mut self) -> &mut RecordMeta { &mut self.meta }
//! }
//!
//! impl Mapped for Wall {
//!     fn field_map() -> FieldMap<Self> {
//!         FieldMap::<Self>::new()
//!             .field("Name", CellType::String, |w| Value::from(w.name.as_str()), |w, v| w.name = v.to_string())
//!             .field("Hitpoints", CellType::Int, |w| Value::Int(w.hitpoints), |w, v| w.hitpoints = v.int_or_zero())
//!     }
//! }
//!
//! let table = Table::from_raw(
//!     "walls",
//!     &["Name", "Hitpoints"],
//!     &["string", "int"],
//!     &[vec!["Wall", "300"], vec!["", "700"], vec!["", ""]],
//! )
//! .unwrap();
//!
//! let walls = deserialize::<Wall>(&table).unwrap();
//! let wall = walls.get_by_key("Wall").unwrap();
//! assert_eq!(wall.len(), 3);
//! assert_eq!(wall.get(2).unwrap().hitpoints, 700);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod deserialize;
pub mod field;

pub use config::{LoadConfig, OrphanRows};
pub use deserialize::{deserialize, deserialize_with_report, Deserializer, LoadReport};
pub use field::{
    FieldDescriptor, FieldMap, FieldMapper, FieldValue, Getter, Mapped, ProjectedField, Setter,
};
