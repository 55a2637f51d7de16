//! Index arithmetic shared by the fixed and dynamic window buffers.
//!
//! ```text
//!   storage = [D, B, C]     capacity = 3
//!   cursor  = 1             (next add writes slot 1)
//!
//!   pos 0 (newest) => slot 0  (D)
//!   pos 1          => slot 2  (C)
//!   pos 2 (oldest) => slot 1  (B)
//! ```

use crate::errors::BufferError;

/// Physical slot holding the `pos`-th most recently added element.
///
/// `pos` must be below `capacity` and `cursor` below `capacity`. Neither
/// branch builds an intermediate larger than `capacity`, so it cannot overflow
/// or go negative.
#[inline]
pub(crate) fn slot_for(cursor: usize, pos: usize, capacity: usize) -> usize {
    debug_assert!(pos < capacity && cursor < capacity);
    if pos < cursor {
        cursor - 1 - pos
    } else {
        capacity - 1 - (pos - cursor)
    }
}

/// Slot the write cursor moves to after writing `cursor`.
#[inline]
pub(crate) fn advance(cursor: usize, capacity: usize) -> usize {
    (cursor + 1) % capacity
}

/// Bounds-checked [`slot_for`]. Checks against `capacity`, not against the
/// number of valid elements, so slots that were never written are reachable.
#[inline]
pub(crate) fn checked_slot(
    cursor: usize,
    pos: usize,
    capacity: usize,
) -> Result<usize, BufferError> {
    if pos >= capacity {
        return Err(BufferError::OutOfRange { pos, capacity });
    }
    Ok(slot_for(cursor, pos, capacity))
}
