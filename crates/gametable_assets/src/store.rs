//! Loaded game data, keyed by data kind.
//!
//! A [`DataStore`] is an immutable snapshot: loading or unloading a kind
//! returns a new store that shares every other kind with the old one.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use gametable_codec::Deserializer;
use gametable_foundation::{Error, Result};
use gametable_storage::{EntityCollection, LevelCollection};
use gametable_table::Table;

use crate::models::DataModel;
use crate::provider::TableProvider;

#[derive(Clone)]
struct Loaded {
    kind: &'static str,
    collection: Arc<dyn Any + Send + Sync>,
}

/// Loaded entity collections, one per data kind.
#[derive(Clone, Default)]
pub struct DataStore {
    kinds: im::HashMap<TypeId, Loaded>,
}

impl DataStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes `table` as kind `T` with the default configuration.
    ///
    /// Returns a new store in which `T` is replaced.
    ///
    /// # Errors
    ///
    /// Propagates deserialization errors; the current store is unchanged.
    pub fn load<T: DataModel>(&self, table: &Table) -> Result<Self> {
        self.load_with::<T>(table, &Deserializer::default())
    }

    /// Deserializes `table` as kind `T` with `deserializer`.
    ///
    /// # Errors
    ///
    /// Propagates deserialization errors; the current store is unchanged.
    pub fn load_with<T: DataModel>(&self, table: &Table, deserializer: &Deserializer) -> Result<Self> {
        let collection = deserializer.deserialize::<T>(table)?;
        Ok(self.with_collection(collection))
    }

    /// Asks `provider` for `T::TABLE` and loads it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the provider has no such table, and
    /// propagates provider and deserialization errors.
    pub fn load_from<T: DataModel, P: TableProvider + ?Sized>(&self, provider: &P) -> Result<Self> {
        let table = provider
            .table(T::TABLE)?
            .ok_or_else(|| Error::invalid_argument(format!("no table at '{}' for {}", T::TABLE, T::KIND)))?;
        self.load::<T>(&table)
    }

    /// Returns a new store holding `collection` as kind `T`.
    #[must_use]
    pub fn with_collection<T: DataModel>(&self, collection: EntityCollection<T>) -> Self {
        let key = TypeId::of::<T>();
        if self.kinds.contains_key(&key) {
            tracing::debug!(kind = T::KIND, "replacing loaded collection");
        }
        let loaded = Loaded {
            kind: T::KIND,
            collection: Arc::new(collection),
        };
        Self {
            kinds: self.kinds.update(key, loaded),
        }
    }

    /// Returns a new store without kind `T`.
    #[must_use]
    pub fn unload<T: DataModel>(&self) -> Self {
        Self {
            kinds: self.kinds.without(&TypeId::of::<T>()),
        }
    }

    /// Returns true if kind `T` is loaded.
    #[must_use]
    pub fn is_loaded<T: DataModel>(&self) -> bool {
        self.kinds.contains_key(&TypeId::of::<T>())
    }

    /// Returns the names of every loaded kind, sorted.
    #[must_use]
    pub fn loaded_kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.kinds.values().map(|l| l.kind).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Returns the number of loaded kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Returns the collection of kind `T`.
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded` if `T` was never loaded.
    pub fn collection<T: DataModel>(&self) -> Result<&EntityCollection<T>> {
        self.kinds
            .get(&TypeId::of::<T>())
            .and_then(|loaded| loaded.collection.downcast_ref::<EntityCollection<T>>())
            .ok_or_else(|| Error::not_loaded(T::KIND))
    }

    /// Returns the entity with `id`.
    ///
    /// # Errors
    ///
    /// `NotLoaded`, `OutOfRange` for an ID outside `T`'s range, or
    /// `NotFound`.
    pub fn get<T: DataModel>(&self, id: i32) -> Result<&LevelCollection<T>> {
        self.collection::<T>()?
            .get(id)?
            .ok_or_else(|| Error::not_found(format!("{} id {id}", T::KIND)))
    }

    /// Returns level `level` of the entity with `id`.
    ///
    /// # Errors
    ///
    /// `NotLoaded`, `OutOfRange`, or `NotFound`.
    pub fn get_level<T: DataModel>(&self, id: i32, level: usize) -> Result<&T> {
        self.get::<T>(id)?
            .get(level)
            .ok_or_else(|| Error::not_found(format!("{} id {id} level {level}", T::KIND)))
    }

    /// Returns the entity whose text key is `key`.
    ///
    /// # Errors
    ///
    /// `NotLoaded` or `NotFound`.
    pub fn get_by_key<T: DataModel>(&self, key: &str) -> Result<&LevelCollection<T>> {
        self.collection::<T>()?
            .get_by_key(key)
            .ok_or_else(|| Error::not_found(format!("{} '{key}'", T::KIND)))
    }

    /// Returns level `level` of the entity whose text key is `key`.
    ///
    /// # Errors
    ///
    /// `NotLoaded` or `NotFound`.
    pub fn get_by_key_level<T: DataModel>(&self, key: &str, level: usize) -> Result<&T> {
        self.get_by_key::<T>(key)?
            .get(level)
            .ok_or_else(|| Error::not_found(format!("{} '{key}' level {level}", T::KIND)))
    }
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStore")
            .field("kinds", &self.loaded_kinds())
            .finish()
    }
}
