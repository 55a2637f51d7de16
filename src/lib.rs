//! Fixed-capacity, overwrite-on-full window buffers.
//!
//! A window keeps the most recently added elements, up to its capacity, and
//! hands them back newest first. [`FixedWindowBuffer`] stores them inline with
//! a compile-time capacity, [`DynWindowBuffer`] allocates once with a capacity
//! chosen at runtime.

pub mod buffer_element;
pub mod dyn_window_buffer;
pub mod errors;
pub mod fixed_window_buffer;
pub mod iter;
mod slots;
pub mod window;

pub use buffer_element::BufferElement;
pub use dyn_window_buffer::DynWindowBuffer;
pub use errors::BufferError;
pub use fixed_window_buffer::FixedWindowBuffer;
pub use iter::Iter;
pub use window::HasWindow;
