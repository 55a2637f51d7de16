/// Read-only observations shared by every window buffer flavour.
pub trait HasWindow {
    /// Number of valid elements currently retained.
    fn size(&self) -> usize;

    /// Fixed maximum number of elements. Never changes for a given buffer.
    fn capacity(&self) -> usize;

    fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
