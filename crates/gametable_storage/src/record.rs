//! Record identity.
//!
//! Every record carries a [`RecordMeta`]: its ID, its text key, its level,
//! and whether it has been locked by a collection. Concrete record types
//! embed one and expose it through [`DataRecord`].

use std::sync::Arc;

use gametable_foundation::{Error, KindRange, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity portion of a record.
///
/// A fresh record has ID 0, an empty text key, level 0, and is unlocked.
/// Once locked, every identity setter fails with `AlreadyLocked`. Cloning
/// a locked record yields a locked record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordMeta {
    id: i32,
    text_key: Arc<str>,
    level: usize,
    locked: bool,
}

impl RecordMeta {
    /// Creates an unlocked identity with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record ID.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Returns the text key.
    #[must_use]
    pub fn text_key(&self) -> &str {
        &self.text_key
    }

    /// Returns the level within the entity.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns true once a collection has taken the record.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Sets the ID, validating it against `range`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the record is locked, or `OutOfRange` if
    /// `id` is outside `range`.
    pub fn set_id(&mut self, range: KindRange, id: i32) -> Result<()> {
        self.ensure_unlocked("id")?;
        range.check("id", id)?;
        self.id = id;
        Ok(())
    }

    /// Sets the text key.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the record is locked.
    pub fn set_text_key(&mut self, text_key: impl Into<Arc<str>>) -> Result<()> {
        self.ensure_unlocked("text key")?;
        self.text_key = text_key.into();
        Ok(())
    }

    /// Sets the level.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the record is locked.
    pub fn set_level(&mut self, level: usize) -> Result<()> {
        self.ensure_unlocked("level")?;
        self.level = level;
        Ok(())
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }

    pub(crate) fn unlock(&mut self) {
        self.locked = false;
    }

    fn ensure_unlocked(&self, field: &str) -> Result<()> {
        if self.locked {
            Err(Error::already_locked(format!(
                "cannot change {field} of record {} ({}) inside a collection",
                self.id, self.text_key
            )))
        } else {
            Ok(())
        }
    }
}

/// A record of one data kind.
///
/// Implementors embed a [`RecordMeta`] and name the kind's base ID. The
/// provided methods forward to the embedded identity with the kind's range.
pub trait DataRecord: 'static {
    /// First ID of this kind.
    const BASE_ID: i32;

    /// Kind name used in log and error messages.
    const KIND: &'static str;

    /// Returns the embedded identity.
    fn meta(&self) -> &RecordMeta;

    /// Returns the embedded identity mutably.
    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Returns the valid ID span of this kind.
    #[must_use]
    fn kind_range() -> KindRange {
        KindRange::new(Self::BASE_ID)
    }

    /// Returns the record ID.
    fn id(&self) -> i32 {
        self.meta().id()
    }

    /// Returns the zero-based entity index (`id - BASE_ID`).
    fn index(&self) -> i32 {
        self.meta().id() - Self::BASE_ID
    }

    /// Returns the text key.
    fn text_key(&self) -> &str {
        self.meta().text_key()
    }

    /// Returns the level.
    fn level(&self) -> usize {
        self.meta().level()
    }

    /// Returns true once a collection has taken the record.
    fn is_locked(&self) -> bool {
        self.meta().is_locked()
    }

    /// Sets the ID, validated against [`DataRecord::kind_range`].
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` or `OutOfRange`.
    fn set_id(&mut self, id: i32) -> Result<()> {
        let range = Self::kind_range();
        self.meta_mut().set_id(range, id)
    }

    /// Sets the text key.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the record is locked.
    fn set_text_key(&mut self, text_key: impl Into<Arc<str>>) -> Result<()> {
        self.meta_mut().set_text_key(text_key)
    }

    /// Sets the level.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the record is locked.
    fn set_level(&mut self, level: usize) -> Result<()> {
        self.meta_mut().set_level(level)
    }
}
