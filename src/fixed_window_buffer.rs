use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::buffer_element::BufferElement;
use crate::errors::BufferError;
use crate::iter::Iter;
use crate::slots::{advance, checked_slot};
use crate::window::HasWindow;

/// A window over the last `N` added elements, stored inline in a `[T; N]`.
///
/// Adding to a full window overwrites the oldest element. Position 0 is always
/// the most recently added element.
///
/// ```
/// use fixed_window::FixedWindowBuffer;
///
/// let mut b = FixedWindowBuffer::<char, 3>::new();
/// b.add('A');
/// b.add('B');
/// b.add('C');
/// b.add('D');
/// assert_eq!(b.at(0), &'D');
/// assert_eq!(b.at(2), &'B');
/// ```
///
/// A zero capacity window is rejected when the type is instantiated:
///
/// ```compile_fail
/// use fixed_window::FixedWindowBuffer;
///
/// let b = FixedWindowBuffer::<u8, 0>::new();
/// ```
#[derive(Clone, Debug)]
pub struct FixedWindowBuffer<T: BufferElement, const N: usize> {
    /// Every slot, written or not
    pub(crate) storage: [T; N],

    /// Slot the next `add` writes to
    pub(crate) cursor: usize,

    /// Number of valid elements, saturates at N
    pub(crate) len: usize,
}

impl<T: BufferElement, const N: usize> FixedWindowBuffer<T, N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "FixedWindowBuffer capacity must be non-zero");

    /// Create an empty window. Unwritten slots hold `T::default()`.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;
        Self {
            storage: std::array::from_fn(|_| T::default()),
            cursor: 0,
            len: 0,
        }
    }

    /// Add an element, discarding the oldest one if the window is full.
    pub fn add(&mut self, el: T) {
        if self.len < N {
            self.len += 1;
        } else {
            trace!(slot = self.cursor, capacity = N, "overwriting oldest element");
        }
        self.storage[self.cursor] = el;
        self.cursor = advance(self.cursor, N);
    }

    /// Overwrite every slot with `el`. Size and write position are untouched.
    pub fn fill(&mut self, el: T) {
        self.storage.fill(el);
    }

    /// The `pos`-th most recently added element.
    ///
    /// Only checked against the capacity: before the window is full, positions
    /// at or past `size()` return whatever `fill` or `T::default()` left there.
    ///
    /// # Panics
    ///
    /// If `pos >= capacity()`.
    pub fn at(&self, pos: usize) -> &T {
        match self.get(pos) {
            Ok(el) => el,
            Err(e) => panic!("{e}"),
        }
    }

    /// Mutable version of [`at`](Self::at). The reference points at the
    /// physical slot, which a later `add` may overwrite.
    ///
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
        let slot = checked_slot(self.cursor, pos, N)?;
        Ok(&self.storage[slot])
    }

    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, BufferError> {
        let slot = checked_slot(self.cursor, pos, N)?;
        Ok(&mut self.storage[slot])
    }

    /// Most recently added element, if any has been added.
    pub fn latest(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        Some(self.at(0))
    }

    /// Valid elements, newest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.storage, self.cursor, self.len)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: BufferElement, const N: usize> Default for FixedWindowBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BufferElement, const N: usize> HasWindow for FixedWindowBuffer<T, N> {
    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        N
    }
}

impl<T: BufferElement, const N: usize> Index<usize> for FixedWindowBuffer<T, N> {
    type Output = T;

    fn index(&self, pos: usize) -> &Self::Output {
        self.at(pos)
    }
}

impl<T: BufferElement, const N: usize> IndexMut<usize> for FixedWindowBuffer<T, N> {
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        self.at_mut(pos)
    }
}

impl<'a, T: BufferElement, const N: usize> IntoIterator for &'a FixedWindowBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: BufferElement, const N: usize> Extend<T> for FixedWindowBuffer<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for el in iter {
            self.add(el);
        }
    }
}

impl<T: BufferElement, const N: usize> FromIterator<T> for FixedWindowBuffer<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn new_window_is_empty() {
        let buffer = FixedWindowBuffer::<u32, 4>::new();
        assert_eq!(buffer.size(), 0);
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.latest(), None);
        assert_eq!(buffer.iter().count(), 0);
    }

    #[test]
    fn capacity_never_changes() {
        let mut buffer = FixedWindowBuffer::<u32, 5>::new();
        assert_eq!(buffer.capacity(), 5);
        for i in 0..17 {
            buffer.add(i);
            assert_eq!(buffer.capacity(), 5);
        }
    }

    #[test_case(0 => 0)]
    #[test_case(1 => 1)]
    #[test_case(63 => 63)]
    #[test_case(64 => 64)]
    #[test_case(65 => 64)]
    #[test_case(200 => 64)]
    fn size_grows_until_full(adds: u32) -> usize {
        let mut buffer = FixedWindowBuffer::<char, 64>::new();
        for i in 0..adds {
            buffer.add(char::from_u32(b'a' as u32 + i % 26).unwrap());
        }
        buffer.size()
    }

    #[test]
    fn is_full_once_size_reaches_capacity() {
        let mut buffer = FixedWindowBuffer::<u8, 2>::new();
        buffer.add(1);
        assert!(!buffer.is_full());
        buffer.add(2);
        assert!(buffer.is_full());
        buffer.add(3);
        assert!(buffer.is_full());
    }

    #[test]
    fn at_returns_last_added_first() {
        let mut buffer = FixedWindowBuffer::<char, 5>::new();
        buffer.add('A');
        buffer.add('B');
        buffer.add('C');
        assert_eq!(buffer[0], 'C');
        assert_eq!(buffer[1], 'B');
        assert_eq!(buffer[2], 'A');
    }

    #[test]
    fn add_past_capacity_drops_oldest() {
        let mut buffer = FixedWindowBuffer::<char, 5>::new();
        for c in ['A', 'B', 'C', 'D', 'E', 'F'] {
            buffer.add(c);
        }
        assert_eq!(buffer.at(0), &'F');
        assert_eq!(buffer.at(1), &'E');
        assert_eq!(buffer.at(2), &'D');
        assert_eq!(buffer.at(3), &'C');
        assert_eq!(buffer.at(4), &'B');
        assert_eq!(buffer.size(), 5);
    }

    #[test]
    fn fill_then_add_walkthrough() {
        let mut buffer = FixedWindowBuffer::<u32, 3>::new();
        buffer.fill(0);
        assert_eq!(buffer.size(), 0);

        buffer.add(1);
        buffer.add(2);
        buffer.add(3);
        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer[0], 3);

        buffer.add(4);
        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer[0], 4);
        assert_eq!(buffer.to_vec(), vec![4, 3, 2]);
    }

    #[test]
    fn fill_leaves_size_and_order_alone() {
        let mut buffer = FixedWindowBuffer::<char, 5>::new();
        buffer.fill('A');
        assert_eq!(buffer.at(0), &'A');
        assert_eq!(buffer.at(2), &'A');
        assert_eq!(buffer.size(), 0);

        buffer.add('B');
        assert_eq!(buffer.at(0), &'B');
        assert_eq!(buffer.at(1), &'A');
        assert_eq!(buffer.size(), 1);
    }

    #[test]
    fn fill_on_full_window_rewrites_contents() {
        let mut buffer: FixedWindowBuffer<u8, 3> = [1, 2, 3, 4].into_iter().collect();
        buffer.fill(9);
        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer.to_vec(), vec![9, 9, 9]);
        buffer.add(5);
        assert_eq!(buffer.to_vec(), vec![5, 9, 9]);
    }

    #[test]
    fn unwritten_slots_read_as_default() {
        let mut buffer = FixedWindowBuffer::<u32, 4>::new();
        buffer.add(7);
        assert_eq!(buffer.at(0), &7);
        assert_eq!(buffer.at(1), &0);
        assert_eq!(buffer.at(3), &0);
    }

    #[test_case(3 => panics "out of range" ; "at capacity")]
    #[test_case(4 => panics "out of range" ; "past capacity")]
    #[test_case(usize::MAX => panics "out of range" ; "max index")]
    fn at_panics_past_capacity(pos: usize) -> u32 {
        let mut buffer = FixedWindowBuffer::<u32, 3>::new();
        buffer.add(1);
        *buffer.at(pos)
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for window of capacity 2")]
    fn index_mut_panics_past_capacity() {
        let mut buffer = FixedWindowBuffer::<u32, 2>::new();
        buffer[2] = 1;
    }

    #[test]
    fn get_reports_out_of_range() {
        let mut buffer = FixedWindowBuffer::<u32, 3>::new();
        buffer.add(1);
        assert_eq!(buffer.get(0), Ok(&1));
        assert_eq!(
            buffer.get(3),
            Err(BufferError::OutOfRange { pos: 3, capacity: 3 })
        );
        assert!(buffer.get_mut(10).is_err());
    }

    #[test]
    fn at_mut_writes_through_to_slot() {
        let mut buffer = FixedWindowBuffer::<u32, 3>::new();
        buffer.add(1);
        buffer.add(2);
        *buffer.at_mut(1) = 10;
        buffer[0] += 5;
        assert_eq!(buffer.to_vec(), vec![7, 10]);
    }

    #[test]
    fn iter_matches_indexed_access() {
        let mut buffer = FixedWindowBuffer::<u32, 4>::new();
        for i in 0..11 {
            buffer.add(i);
            itertools::assert_equal(
                buffer.iter().copied(),
                (0..buffer.size()).map(|p| buffer[p]),
            );
            assert_eq!(buffer.iter().len(), buffer.size());
        }
    }

    #[test]
    fn iter_is_restartable() {
        let buffer: FixedWindowBuffer<char, 3> = "ABC".chars().collect();
        let first: String = buffer.iter().collect();
        let second: String = (&buffer).into_iter().collect();
        assert_eq!(first, "CBA");
        assert_eq!(first, second);
    }

    #[test]
    fn iter_rev_yields_oldest_first() {
        let buffer: FixedWindowBuffer<u8, 3> = (1..=5).collect();
        let oldest_first: Vec<u8> = buffer.iter().rev().copied().collect();
        assert_eq!(oldest_first, vec![3, 4, 5]);
    }

    #[test]
    fn extend_keeps_only_newest() {
        let mut buffer = FixedWindowBuffer::<u8, 2>::new();
        buffer.extend([1, 2, 3]);
        buffer.extend(Vec::new());
        assert_eq!(buffer.to_vec(), vec![3, 2]);
        assert_eq!(buffer.latest(), Some(&3));
    }

    #[test]
    fn single_slot_window_holds_latest() {
        let mut buffer = FixedWindowBuffer::<String, 1>::new();
        buffer.add("first".to_string());
        buffer.add("second".to_string());
        assert_eq!(buffer.size(), 1);
        assert_eq!(buffer.at(0), "second");
        assert_eq!(buffer.to_vec(), vec!["second".to_string()]);
    }
}
