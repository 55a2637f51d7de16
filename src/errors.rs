use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("index {pos} out of range for window of capacity {capacity}")]
    OutOfRange { pos: usize, capacity: usize },

    #[error("window capacity must be non-zero")]
    InvalidCapacity,
}
