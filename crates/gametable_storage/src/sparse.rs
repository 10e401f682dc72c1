//! Sparse slot storage shared by the collection types.

/// Index-addressed slots with an insertion-ordered list of occupied indices.
///
/// Slots grow on demand. Iteration follows the order in which indices were
/// first occupied, not index order.
#[derive(Debug, Clone)]
pub(crate) struct SparseSlots<T> {
    slots: Vec<Option<T>>,
    occupied: Vec<usize>,
}

impl<T> Default for SparseSlots<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> SparseSlots<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            occupied: Vec::new(),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Stores `value` at `index`, returning the value it displaced.
    pub(crate) fn replace(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        let previous = self.slots[index].replace(value);
        if previous.is_none() {
            self.occupied.push(index);
        }
        previous
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        let removed = self.slots.get_mut(index)?.take()?;
        if let Some(pos) = self.occupied.iter().position(|&i| i == index) {
            self.occupied.remove(pos);
        }
        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.occupied.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.occupied.len()
    }

    pub(crate) fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.occupied.iter().copied()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.occupied.iter().filter_map(|&i| self.slots[i].as_ref())
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        // Slots are visited in index order here; callers only use this for
        // order-independent updates.
        self.slots.iter_mut().filter_map(Option::as_mut)
    }
}
