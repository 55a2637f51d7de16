/// Anything that can be stored in a window buffer. `Default` fills slots that
/// have never been written, `Clone` is how `add` and `fill` copy values in.
pub trait BufferElement: Clone + Default {}
impl<T> BufferElement for T where T: Clone + Default {}
