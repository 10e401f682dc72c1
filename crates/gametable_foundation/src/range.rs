//! Identity ranges for data kinds.
//!
//! Every data kind owns a contiguous block of IDs starting at its base ID.
//! An entity's ID is `base + index`, where `index` is the entity's ordinal
//! among all entities of that kind.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest entity index a kind can hold.
pub const MAX_INDEX: i32 = 999_999;

/// Valid ID span `[min, max]` of one data kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KindRange {
    min: i32,
    max: i32,
}

impl KindRange {
    /// Creates the range for a kind whose first ID is `base`.
    #[must_use]
    pub const fn new(base: i32) -> Self {
        Self {
            min: base,
            max: base.saturating_add(MAX_INDEX),
        }
    }

    /// Returns the lowest valid ID (the kind's base ID).
    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Returns the highest valid ID.
    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Returns true if `id` lies within the range.
    #[must_use]
    pub const fn contains(self, id: i32) -> bool {
        id >= self.min && id <= self.max
    }

    /// Validates `id`, naming it `what` in the error message.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `id` is outside the range.
    pub fn check(self, what: &'static str, id: i32) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::out_of_range(what, i64::from(id), self.min, self.max))
        }
    }

    /// Converts an ID into its zero-based index within the kind.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `id` is outside the range.
    #[allow(clippy::cast_sign_loss)]
    pub fn index_of(self, id: i32) -> Result<usize> {
        self.check("id", id)?;
        Ok((id - self.min) as usize)
    }

    /// Converts a zero-based entity index into its ID.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index` exceeds [`MAX_INDEX`] or the ID
    /// would pass the top of the range.
    pub fn id_at(self, index: usize) -> Result<i32> {
        let id = i32::try_from(index)
            .ok()
            .filter(|&index| index <= MAX_INDEX)
            .and_then(|index| self.min.checked_add(index));
        match id {
            Some(id) if id <= self.max => Ok(id),
            _ => Err(Error::out_of_range(
                "index",
                i64::try_from(index).unwrap_or(i64::MAX),
                0,
                self.max - self.min,
            )),
        }
    }
}

impl fmt::Display for KindRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
