//! All entities of one kind.
//!
//! An [`EntityCollection`] maps IDs to [`LevelCollection`]s. The slot for an
//! ID is `id - BASE_ID`; text-key lookup is a linear scan.

use gametable_foundation::{Error, Result};

use crate::level::LevelCollection;
use crate::record::DataRecord;
use crate::sparse::SparseSlots;

/// Number of entity slots reserved up front.
const INITIAL_ENTITY_CAPACITY: usize = 48;

/// Every entity of one data kind, indexed by ID.
#[derive(Debug, Clone)]
pub struct EntityCollection<T> {
    entities: SparseSlots<LevelCollection<T>>,
    sealed: bool,
}

impl<T: DataRecord> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DataRecord> EntityCollection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: SparseSlots::with_capacity(INITIAL_ENTITY_CAPACITY),
            sealed: false,
        }
    }

    /// Returns the level collection with `id`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `id` is outside `T`'s kind range.
    pub fn get(&self, id: i32) -> Result<Option<&LevelCollection<T>>> {
        let index = T::kind_range().index_of(id)?;
        Ok(self.entities.get(index))
    }

    /// Runs `f` on level `level` of the entity with `id`. See
    /// [`LevelCollection::update`].
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if sealed or `f` changed the record's
    /// identity, or `OutOfRange` for a bad `id`.
    pub fn update<R>(&mut self, id: i32, level: usize, f: impl FnOnce(&mut T) -> R) -> Result<Option<R>> {
        self.ensure_open()?;
        let index = T::kind_range().index_of(id)?;
        match self.entities.get_mut(index) {
            Some(levels) => levels.update(level, f),
            None => Ok(None),
        }
    }

    /// Returns the first level collection whose text key is `text_key`.
    #[must_use]
    pub fn get_by_key(&self, text_key: &str) -> Option<&LevelCollection<T>> {
        self.entities.iter().find(|levels| levels.text_key() == text_key)
    }

    /// Returns true if an entity with `id` is present.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `id` is outside `T`'s kind range.
    pub fn contains(&self, id: i32) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Returns true if an entity with `text_key` is present.
    #[must_use]
    pub fn contains_key(&self, text_key: &str) -> bool {
        self.get_by_key(text_key).is_some()
    }

    /// Adds `levels` under its own ID.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if sealed, or `DuplicateIdentity` if the ID
    /// is taken.
    pub fn insert(&mut self, levels: LevelCollection<T>) -> Result<()> {
        self.ensure_open()?;
        let index = T::kind_range().index_of(levels.id())?;
        if self.entities.contains(index) {
            return Err(Error::duplicate(format!(
                "{} id {} is already present",
                T::KIND,
                levels.id()
            )));
        }
        self.entities.replace(index, levels);
        Ok(())
    }

    /// Stores `levels` under its own ID, returning whatever it replaced.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if sealed.
    pub fn set(&mut self, levels: LevelCollection<T>) -> Result<Option<LevelCollection<T>>> {
        self.ensure_open()?;
        let index = T::kind_range().index_of(levels.id())?;
        Ok(self.entities.replace(index, levels))
    }

    /// Removes the entity with `id`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if sealed, or `OutOfRange` for a bad `id`.
    pub fn remove(&mut self, id: i32) -> Result<Option<LevelCollection<T>>> {
        self.ensure_open()?;
        let index = T::kind_range().index_of(id)?;
        Ok(self.entities.remove(index))
    }

    /// Removes the first entity whose text key is `text_key`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if sealed.
    pub fn remove_by_key(&mut self, text_key: &str) -> Result<Option<LevelCollection<T>>> {
        self.ensure_open()?;
        let found = self
            .entities
            .indices()
            .find(|&i| self.entities.get(i).is_some_and(|l| l.text_key() == text_key));
        Ok(found.and_then(|index| self.entities.remove(index)))
    }

    /// Removes every entity.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if sealed.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.entities.clear();
        Ok(())
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if there are no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.len() == 0
    }

    /// Returns the total number of records across all entities.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.entities.iter().map(LevelCollection::len).sum()
    }

    /// Iterates entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LevelCollection<T>> + '_ {
        self.entities.iter()
    }

    /// Iterates entity IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.entities.iter().map(LevelCollection::id)
    }

    /// Marks this collection and every entity in it read-only.
    pub fn seal(&mut self) {
        self.entities.iter_mut().for_each(LevelCollection::seal);
        self.sealed = true;
    }

    /// Returns true once the collection is read-only.
    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.sealed {
            Err(Error::already_locked(format!("{} collection is read-only", T::KIND)))
        } else {
            Ok(())
        }
    }
}

impl<'a, T: DataRecord> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a LevelCollection<T>;
    type IntoIter = Box<dyn Iterator<Item = &'a LevelCollection<T>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
