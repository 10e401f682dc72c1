//! Game data models and the loaded-data store for gametable.
//!
//! Each data kind ([`BuildingData`], [`TrapData`], ...) is a record type with
//! its own ID range and table path. A [`DataStore`] holds one sealed
//! entity collection per loaded kind and answers lookups by ID, text key,
//! and level. [`SharedDataStore`] wraps it for use across threads.
//!
//! ```
//! use gametable_assets::{BuildingData, DataStore};
//! use gametable_table::Table;
//!
//! let table = Table::from_raw(
//!     "buildings",
//!     &["Name", "Hitpoints"],
//!     &["string", "int"],
//!     &[vec!["Cannon", "420"], vec!["", "470"]],
//! )?;
//! let store = DataStore::new().load::<BuildingData>(&table)?;
//! let cannon = store.get_by_key::<BuildingData>("Cannon")?;
//! assert_eq!(cannon.len(), 2);
//! assert_eq!(store.get_level::<BuildingData>(1_000_000, 1)?.hitpoints, 470);
//! # Ok::<(), gametable_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod models;
pub mod provider;
pub mod shared;
pub mod store;

pub use models::{
    BuildingData, CharacterData, DataModel, DecorationData, ObstacleData, ResourceData, SpellData, TrapData,
};
pub use provider::TableProvider;
pub use shared::{LockMode, SharedDataStore};
pub use store::DataStore;
