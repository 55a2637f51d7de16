use std::iter::FusedIterator;
use std::ops::Range;

use crate::slots::slot_for;

/// Newest-first view over the valid elements of a window buffer.
///
/// Holds a shared borrow of the storage, so the buffer cannot be mutated
/// while the iterator is alive. Iterating from the back yields oldest-first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: &'a [T],
    cursor: usize,
    positions: Range<usize>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [T], cursor: usize, len: usize) -> Self {
        Self {
            slots,
            cursor,
            positions: 0..len,
        }
    }

    fn slot(&self, pos: usize) -> &'a T {
        &self.slots[slot_for(self.cursor, pos, self.slots.len())]
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
            positions: self.positions.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.positions.next()?;
        Some(self.slot(pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let pos = self.positions.next_back()?;
        Some(self.slot(pos))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
