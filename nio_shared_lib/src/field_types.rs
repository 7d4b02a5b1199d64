/// offset in bytes, relative to the start of a ByteBuffer
pub type ByteIndex = usize;
/// index of a logical element inside a typed view
pub type ElementIndex = usize;
/// the saved position of a cursor, if any
pub type Mark = Option<usize>;
