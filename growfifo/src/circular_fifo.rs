use std::fmt;

use tracing::{debug, warn};

use crate::config::{FifoConfig, GrowthPolicy};
use crate::error::FifoError;
use crate::iter::{Drain, Iter};

/// FIFO buffer backed by a circular array that grows when it is full.
///
/// Values are pushed at the back and shifted off the front. Any live value
/// can be read by its logical index without removing it; negative indices
/// count from the newest value (`-1`).
#[derive(Clone)]
pub struct CircularFifo<T> {
    storage: Vec<Option<T>>,
    start: usize,
    length: usize,
    growth: GrowthPolicy,
}

impl<T> CircularFifo<T> {
    /// Creates an empty buffer with exactly `capacity` slots. A capacity of
    /// zero is allowed; the first push then grows the buffer.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, GrowthPolicy::default())
    }

    pub fn with_config(config: FifoConfig) -> Result<Self, FifoError> {
        config.validate()?;
        Ok(Self::with_policy(config.initial_capacity, config.growth))
    }

    fn with_policy(capacity: usize, growth: GrowthPolicy) -> Self {
        let mut storage = Vec::with_capacity(capacity);
        storage.resize_with(capacity, || None);
        CircularFifo {
            storage,
            start: 0,
            length: 0,
            growth,
        }
    }

    /// Appends `value` as the newest element, growing the storage first if
    /// every slot is taken.
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            let new_capacity = self.growth.next_capacity(self.capacity());
            self.reflow(Vec::with_capacity(new_capacity), new_capacity);
        }
        self.write_back(value);
    }

    /// Like [`push`](Self::push), but reports allocation failure instead of
    /// aborting. On error the buffer is left untouched and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), FifoError> {
        if self.is_full() {
            if let Err(err) = self.try_grow() {
                warn!(capacity = self.capacity(), error = %err, "failed to grow fifo storage");
                return Err(err);
            }
        }
        self.write_back(value);
        Ok(())
    }

    /// Removes and returns the oldest element, or `None` if the buffer is empty.
    pub fn shift(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        let value = self.storage[self.start].take();
        self.start = (self.start + 1) % self.capacity();
        self.length -= 1;
        value
    }

    /// Returns the element at logical `index` without removing it.
    ///
    /// `0` is the oldest element and `-1` the newest. Indices outside
    /// `-len..len` yield `None`.
    pub fn item(&self, index: isize) -> Option<&T> {
        let logical = if index >= 0 {
            index as usize
        } else {
            let back = index.unsigned_abs();
            if back > self.length {
                return None;
            }
            self.length - back
        };
        self.get(logical)
    }

    /// Returns the element `logical` positions after the oldest one.
    pub fn get(&self, logical: usize) -> Option<&T> {
        if logical >= self.length {
            return None;
        }
        self.storage[self.physical(logical)].as_ref()
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.item(-1)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of slots in the backing store, live or not.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Calls `visit` with every element, oldest first.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.storage, self.start, self.length)
    }

    /// Shifts elements off the front for as long as the returned iterator is
    /// polled. Elements not yet yielded stay in the buffer.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    fn is_full(&self) -> bool {
        self.length == self.capacity()
    }

    fn physical(&self, logical: usize) -> usize {
        (self.start + logical) % self.capacity()
    }

    fn write_back(&mut self, value: T) {
        let slot = self.physical(self.length);
        self.storage[slot] = Some(value);
        self.length += 1;
    }

    fn try_grow(&mut self) -> Result<(), FifoError> {
        let capacity = self.capacity();
        let new_capacity = self
            .growth
            .checked_next_capacity(capacity)
            .ok_or(FifoError::CapacityOverflow { capacity })?;
        let mut storage = Vec::new();
        storage.try_reserve_exact(new_capacity)?;
        self.reflow(storage, new_capacity);
        Ok(())
    }

    // Moves the live range, oldest first, to the front of `storage` and
    // adopts it. `storage` must be empty with room for `new_capacity` slots.
    fn reflow(&mut self, mut storage: Vec<Option<T>>, new_capacity: usize) {
        let old_capacity = self.capacity();
        let end = self.start + self.length;

        let tail = self.start..end.min(old_capacity);
        storage.extend(self.storage[tail].iter_mut().map(Option::take));
        if end > old_capacity {
            let head = 0..end - old_capacity;
            storage.extend(self.storage[head].iter_mut().map(Option::take));
        }
        storage.resize_with(new_capacity, || None);

        debug!(old_capacity, new_capacity, length = self.length, "grew fifo storage");
        self.storage = storage;
        self.start = 0;
    }
}

impl<T> Default for CircularFifo<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularFifo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for CircularFifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for CircularFifo<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut fifo = CircularFifo::new(iter.size_hint().0);
        fifo.extend(iter);
        fifo
    }
}

impl<'a, T> IntoIterator for &'a CircularFifo<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflow_unwraps_live_range() {
        let mut fifo = CircularFifo::new(4);
        fifo.extend([1, 2, 3, 4]);
        fifo.shift();
        fifo.shift();
        fifo.push(5);
        fifo.push(6);
        assert_eq!(fifo.start, 2);

        fifo.push(7);
        assert_eq!(fifo.start, 0);
        assert_eq!(fifo.capacity(), 8);
        let slots: Vec<Option<i32>> = fifo.storage.clone();
        assert_eq!(
            slots,
            vec![Some(3), Some(4), Some(5), Some(6), Some(7), None, None, None]
        );
    }

    #[test]
    fn shift_vacates_slot() {
        let mut fifo = CircularFifo::new(2);
        fifo.push("a");
        fifo.push("b");
        assert_eq!(fifo.shift(), Some("a"));
        assert_eq!(fifo.storage[0], None);
        assert_eq!(fifo.start, 1);
    }

    #[test]
    fn try_push_reports_overflow() {
        let mut fifo: CircularFifo<u8> = CircularFifo::new(0);
        fifo.growth = GrowthPolicy {
            empty_growth: 2,
            growth_factor: usize::MAX,
        };
        fifo.try_push(1).unwrap();
        fifo.try_push(2).unwrap();
        assert_eq!(fifo.capacity(), 2);

        let err = fifo.try_push(3).unwrap_err();
        assert_eq!(err, FifoError::CapacityOverflow { capacity: 2 });
        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.capacity(), 2);
        assert_eq!(fifo.back(), Some(&2));
    }

    #[test]
    fn try_push_reports_failed_allocation() {
        let mut fifo: CircularFifo<u64> = CircularFifo::new(1);
        fifo.growth = GrowthPolicy {
            empty_growth: 1,
            growth_factor: usize::MAX / 2,
        };
        fifo.push(1);

        let err = fifo.try_push(2).unwrap_err();
        assert!(matches!(err, FifoError::Allocation(_)));
        assert_eq!(fifo.shift(), Some(1));
    }
}
