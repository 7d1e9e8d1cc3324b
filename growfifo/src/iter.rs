use std::iter::FusedIterator;

use crate::circular_fifo::CircularFifo;

/// Borrowing iterator over a [`CircularFifo`], oldest element first.
pub struct Iter<'a, T> {
    storage: &'a [Option<T>],
    head: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(storage: &'a [Option<T>], start: usize, length: usize) -> Self {
        Iter {
            storage,
            head: start,
            remaining: length,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            storage: self.storage,
            head: self.head,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.storage[self.head].as_ref();
        self.head = (self.head + 1) % self.storage.len();
        self.remaining -= 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = (self.head + self.remaining) % self.storage.len();
        self.storage[slot].as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Iterator returned by [`CircularFifo::drain`].
pub struct Drain<'a, T> {
    fifo: &'a mut CircularFifo<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(fifo: &'a mut CircularFifo<T>) -> Self {
        Drain { fifo }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.fifo.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.fifo.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}
