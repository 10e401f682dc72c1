//! The levels of one entity.
//!
//! A [`LevelCollection`] holds every record that shares one ID and text key,
//! indexed by level. Storage is sparse: levels need not be contiguous.

use std::sync::Arc;

use gametable_foundation::{Error, Result};

use crate::record::DataRecord;
use crate::sparse::SparseSlots;

/// Default number of level slots reserved up front.
pub const DEFAULT_LEVEL_CAPACITY: usize = 16;

/// Highest level a collection accepts.
pub const MAX_LEVEL: usize = 9_999;

/// All levels of one entity.
///
/// Every record in the collection has the collection's ID and text key.
/// Records are locked when they enter and unlocked when removed.
#[derive(Debug, Clone)]
pub struct LevelCollection<T> {
    id: i32,
    text_key: Arc<str>,
    levels: SparseSlots<T>,
    sealed: bool,
}

impl<T: DataRecord> LevelCollection<T> {
    /// Creates an empty collection for entity `id` named `text_key`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `id` is outside `T`'s kind range, or
    /// `InvalidArgument` if `text_key` is empty.
    pub fn new(id: i32, text_key: impl Into<Arc<str>>) -> Result<Self> {
        Self::with_capacity(id, text_key, DEFAULT_LEVEL_CAPACITY)
    }

    /// Creates an empty collection reserving `capacity` level slots, up
    /// to `MAX_LEVEL + 1`.
    ///
    /// # Errors
    ///
    /// Same as [`LevelCollection::new`].
    pub fn with_capacity(id: i32, text_key: impl Into<Arc<str>>, capacity: usize) -> Result<Self> {
        T::kind_range().check("id", id)?;
        let text_key = text_key.into();
        if text_key.is_empty() {
            return Err(Error::invalid_argument(format!(
                "{} collection {id} needs a non-empty text key",
                T::KIND
            )));
        }
        Ok(Self {
            id,
            text_key,
            levels: SparseSlots::with_capacity(capacity.min(MAX_LEVEL + 1)),
            sealed: false,
        })
    }

    /// Returns the entity ID shared by every level.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Returns the zero-based entity index within the kind.
    #[must_use]
    pub const fn index(&self) -> i32 {
        self.id - T::BASE_ID
    }

    /// Returns the text key shared by every level.
    #[must_use]
    pub fn text_key(&self) -> &str {
        &self.text_key
    }

    /// Returns the record at `level`.
    #[must_use]
    pub fn get(&self, level: usize) -> Option<&T> {
        self.levels.get(level)
    }

    /// Runs `f` on the record at `level`, returning its result, or `None`
    /// if the level is empty.
    ///
    /// Only payload fields may change. If `f` alters the record's identity,
    /// the identity is put back and the call fails.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the collection is sealed or `f` changed
    /// the record's identity.
    pub fn update<R>(&mut self, level: usize, f: impl FnOnce(&mut T) -> R) -> Result<Option<R>> {
        self.ensure_open()?;
        let Some(record) = self.levels.get_mut(level) else {
            return Ok(None);
        };
        let identity = record.meta().clone();
        let out = f(&mut *record);
        if *record.meta() != identity {
            *record.meta_mut() = identity;
            return Err(Error::already_locked(format!(
                "{} {} ({}) level {level}: identity cannot change inside a collection",
                T::KIND,
                self.id,
                self.text_key
            )));
        }
        Ok(Some(out))
    }

    /// Returns true if `level` is occupied.
    #[must_use]
    pub fn contains(&self, level: usize) -> bool {
        self.levels.contains(level)
    }

    /// Adds `record` at its own level and locks it.
    ///
    /// # Errors
    ///
    /// - `AlreadyLocked` if the collection is sealed or the record is
    ///   already locked by another collection
    /// - `InvalidArgument` if the record's ID or text key differ from the
    ///   collection's
    /// - `OutOfRange` if the level exceeds [`MAX_LEVEL`]
    /// - `DuplicateIdentity` if the level is occupied
    pub fn insert(&mut self, mut record: T) -> Result<()> {
        self.admit(&record)?;
        let level = record.level();
        check_level(level)?;
        if self.levels.contains(level) {
            return Err(Error::duplicate(format!(
                "{} {} ({}) already has level {level}",
                T::KIND,
                self.id,
                self.text_key
            )));
        }
        record.meta_mut().lock();
        self.levels.replace(level, record);
        Ok(())
    }

    /// Stores `record` at `level`, replacing any record already there.
    ///
    /// The record's level is set to `level` before it is locked. Returns the
    /// displaced record, unlocked.
    ///
    /// # Errors
    ///
    /// Same as [`LevelCollection::insert`], except an occupied level is
    /// not an error.
    pub fn set(&mut self, level: usize, mut record: T) -> Result<Option<T>> {
        self.admit(&record)?;
        check_level(level)?;
        record.set_level(level)?;
        record.meta_mut().lock();
        Ok(self.levels.replace(level, record).map(release))
    }

    /// Removes the record at `level`, returning it unlocked.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the collection is sealed.
    pub fn remove(&mut self, level: usize) -> Result<Option<T>> {
        self.ensure_open()?;
        Ok(self.levels.remove(level).map(release))
    }

    /// Removes every record.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the collection is sealed.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.levels.clear();
        Ok(())
    }

    /// Returns the number of occupied levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if no level is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.len() == 0
    }

    /// Iterates records in the order their levels were first occupied.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.levels.iter()
    }

    /// Iterates occupied levels in occupation order.
    pub fn levels(&self) -> impl Iterator<Item = usize> + '_ {
        self.levels.indices()
    }

    /// Collects the records in occupation order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&T> {
        self.levels.iter().collect()
    }

    /// Returns the record with the lowest level.
    #[must_use]
    pub fn min_level_record(&self) -> Option<&T> {
        self.levels.indices().min().and_then(|level| self.levels.get(level))
    }

    /// Returns the record with the highest level.
    #[must_use]
    pub fn max_level_record(&self) -> Option<&T> {
        self.levels.indices().max().and_then(|level| self.levels.get(level))
    }

    /// Marks the collection read-only.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Returns true once the collection is read-only.
    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.sealed {
            Err(Error::already_locked(format!(
                "{} collection {} ({}) is read-only",
                T::KIND,
                self.id,
                self.text_key
            )))
        } else {
            Ok(())
        }
    }

    fn admit(&self, record: &T) -> Result<()> {
        self.ensure_open()?;
        if record.is_locked() {
            return Err(Error::already_locked(format!(
                "{} record {} ({}) level {} already belongs to a collection",
                T::KIND,
                record.id(),
                record.text_key(),
                record.level()
            )));
        }
        if record.id() != self.id {
            return Err(Error::invalid_argument(format!(
                "record id {} does not match collection id {}",
                record.id(),
                self.id
            )));
        }
        if record.text_key() != &*self.text_key {
            return Err(Error::invalid_argument(format!(
                "record text key '{}' does not match collection text key '{}'",
                record.text_key(),
                self.text_key
            )));
        }
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn check_level(level: usize) -> Result<()> {
    if level > MAX_LEVEL {
        return Err(Error::out_of_range(
            "level",
            i64::try_from(level).unwrap_or(i64::MAX),
            0,
            MAX_LEVEL as i32,
        ));
    }
    Ok(())
}

fn release<T: DataRecord>(mut record: T) -> T {
    record.meta_mut().unlock();
    record
}

impl<'a, T: DataRecord> IntoIterator for &'a LevelCollection<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
