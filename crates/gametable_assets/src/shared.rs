//! A data store shared across threads.
//!
//! Readers take cheap snapshots; loads deserialize outside the lock and
//! swap the new snapshot in. Loading and unloading can each be locked
//! independently, for instance once startup has finished.

use std::fmt;
use std::ops::BitOr;

use gametable_codec::Deserializer;
use gametable_foundation::{Error, Result};
use gametable_table::Table;
use parking_lot::RwLock;

use crate::models::DataModel;
use crate::provider::TableProvider;
use crate::store::DataStore;

/// Which mutations a [`SharedDataStore`] currently refuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LockMode {
    loading: bool,
    unloading: bool,
}

impl LockMode {
    /// Nothing locked.
    pub const NONE: Self = Self { loading: false, unloading: false };
    /// Loads are refused.
    pub const LOADING: Self = Self { loading: true, unloading: false };
    /// Unloads are refused.
    pub const UNLOADING: Self = Self { loading: false, unloading: true };
    /// Loads and unloads are refused.
    pub const BOTH: Self = Self { loading: true, unloading: true };

    /// Returns true if loads are refused.
    #[must_use]
    pub const fn locks_loading(self) -> bool {
        self.loading
    }

    /// Returns true if unloads are refused.
    #[must_use]
    pub const fn locks_unloading(self) -> bool {
        self.unloading
    }
}

impl BitOr for LockMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            loading: self.loading || rhs.loading,
            unloading: self.unloading || rhs.unloading,
        }
    }
}

/// A [`DataStore`] behind a lock, with optional load and unload locks.
#[derive(Default)]
pub struct SharedDataStore {
    store: RwLock<DataStore>,
    mode: RwLock<LockMode>,
    deserializer: Deserializer,
}

impl SharedDataStore {
    /// Creates an empty, unlocked store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that loads with `deserializer`.
    #[must_use]
    pub fn with_deserializer(deserializer: Deserializer) -> Self {
        Self {
            deserializer,
            ..Self::default()
        }
    }

    /// Returns the current snapshot.
    ///
    /// The snapshot does not observe later loads or unloads.
    #[must_use]
    pub fn snapshot(&self) -> DataStore {
        self.store.read().clone()
    }

    /// Runs `f` against the current store under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&DataStore) -> R) -> R {
        f(&self.store.read())
    }

    /// Returns the current lock mode.
    #[must_use]
    pub fn lock_mode(&self) -> LockMode {
        *self.mode.read()
    }

    /// Replaces the lock mode.
    pub fn lock(&self, mode: LockMode) {
        tracing::debug!(loading = mode.loading, unloading = mode.unloading, "data store lock mode");
        *self.mode.write() = mode;
    }

    /// Returns true if kind `T` is loaded.
    #[must_use]
    pub fn is_loaded<T: DataModel>(&self) -> bool {
        self.store.read().is_loaded::<T>()
    }

    /// Deserializes `table` as kind `T` and installs it, replacing any
    /// previous load of `T`.
    ///
    /// # Errors
    ///
    /// `AlreadyLocked` if loading is locked, or any deserialization error.
    /// On error the store is unchanged.
    pub fn load<T: DataModel>(&self, table: &Table) -> Result<()> {
        self.ensure_loading::<T>()?;
        let collection = self.deserializer.deserialize::<T>(table)?;

        let mut store = self.store.write();
        self.ensure_loading::<T>()?;
        *store = store.with_collection(collection);
        tracing::info!(kind = T::KIND, table = table.name(), "loaded game data");
        Ok(())
    }

    /// Asks `provider` for `T::TABLE` and loads it.
    ///
    /// # Errors
    ///
    /// `AlreadyLocked`, `InvalidArgument` if the provider has no such table,
    /// or any provider or deserialization error.
    pub fn load_from<T: DataModel, P: TableProvider + ?Sized>(&self, provider: &P) -> Result<()> {
        self.ensure_loading::<T>()?;
        let table = provider
            .table(T::TABLE)?
            .ok_or_else(|| Error::invalid_argument(format!("no table at '{}' for {}", T::TABLE, T::KIND)))?;
        self.load::<T>(&table)
    }

    /// Removes kind `T`. Returns whether it was loaded.
    ///
    /// # Errors
    ///
    /// `AlreadyLocked` if unloading is locked.
    pub fn unload<T: DataModel>(&self) -> Result<bool> {
        let mut store = self.store.write();
        if self.lock_mode().unloading {
            return Err(Error::already_locked(format!("unloading {} is locked", T::KIND)));
        }
        let was_loaded = store.is_loaded::<T>();
        *store = store.unload::<T>();
        if was_loaded {
            tracing::info!(kind = T::KIND, "unloaded game data");
        }
        Ok(was_loaded)
    }

    fn ensure_loading<T: DataModel>(&self) -> Result<()> {
        if self.lock_mode().loading {
            return Err(Error::already_locked(format!("loading {} is locked", T::KIND)));
        }
        Ok(())
    }
}

impl fmt::Debug for SharedDataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDataStore")
            .field("store", &*self.store.read())
            .field("mode", &self.lock_mode())
            .finish_non_exhaustive()
    }
}
