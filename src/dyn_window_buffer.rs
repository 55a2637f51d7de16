use std::ops::{Index, IndexMut};

use tracing::{debug, trace, warn};

use crate::buffer_element::BufferElement;
use crate::errors::BufferError;
use crate::fixed_window_buffer::FixedWindowBuffer;
use crate::iter::Iter;
use crate::slots::{advance, checked_slot};
use crate::window::HasWindow;

/// A window over the last `capacity` added elements, with the capacity chosen
/// at construction. Storage is allocated once and never resized.
#[derive(Clone, Debug)]
pub struct DynWindowBuffer<T: BufferElement> {
    storage: Box<[T]>,
    cursor: usize,
    len: usize,
}

impl<T: BufferElement> DynWindowBuffer<T> {
    /// ```
    /// use fixed_window::{BufferError, DynWindowBuffer};
    ///
    /// assert!(DynWindowBuffer::<u8>::new(4).is_ok());
    /// assert_eq!(DynWindowBuffer::<u8>::new(0).unwrap_err(), BufferError::InvalidCapacity);
    /// ```
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            warn!("refusing to allocate a zero capacity window");
            return Err(BufferError::InvalidCapacity);
        }
        debug!(capacity, "allocating window buffer");
        Ok(Self {
            storage: vec![T::default(); capacity].into_boxed_slice(),
            cursor: 0,
            len: 0,
        })
    }

    pub fn add(&mut self, el: T) {
        let capacity = self.storage.len();
        if self.len < capacity {
            self.len += 1;
        } else {
            trace!(slot = self.cursor, capacity, "overwriting oldest element");
        }
        self.storage[self.cursor] = el;
        self.cursor = advance(self.cursor, capacity);
    }

    /// Overwrite every slot with `el`. Size and write position are untouched.
    pub fn fill(&mut self, el: T) {
        self.storage.fill(el);
    }

    /// # Panics
    ///
    /// If `pos >= capacity()`.
    pub fn at(&self, pos: usize) -> &T {
        match self.get(pos) {
            Ok(el) => el,
            Err(e) => panic!("{e}"),
        }
    }

    /// # Panics
    ///
    /// If `pos >= capacity()`.
    pub fn at_mut(&mut self, pos: usize) -> &mut T {
        match self.get_mut(pos) {
            Ok(el) => el,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn get(&self, pos: usize) -> Result<&T, BufferError> {
        let slot = checked_slot(self.cursor, pos, self.storage.len())?;
        Ok(&self.storage[slot])
    }

    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, BufferError> {
        let slot = checked_slot(self.cursor, pos, self.storage.len())?;
        Ok(&mut self.storage[slot])
    }

    pub fn latest(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        Some(self.at(0))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.storage, self.cursor, self.len)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: BufferElement> HasWindow for DynWindowBuffer<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.storage.len()
    }
}

impl<T: BufferElement, const N: usize> From<FixedWindowBuffer<T, N>> for DynWindowBuffer<T> {
    fn from(fixed: FixedWindowBuffer<T, N>) -> Self {
        Self {
            storage: Box::from(fixed.storage),
            cursor: fixed.cursor,
            len: fixed.len,
        }
    }
}

impl<T: BufferElement> Index<usize> for DynWindowBuffer<T> {
    type Output = T;

    fn index(&self, pos: usize) -> &Self::Output {
        self.at(pos)
    }
}

impl<T: BufferElement> IndexMut<usize> for DynWindowBuffer<T> {
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        self.at_mut(pos)
    }
}

impl<'a, T: BufferElement> IntoIterator for &'a DynWindowBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: BufferElement> Extend<T> for DynWindowBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for el in iter {
            self.add(el);
        }
    }
}
