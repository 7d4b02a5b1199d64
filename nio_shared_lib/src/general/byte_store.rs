/// Trait for the storage behind a ByteBuffer
///
/// A store is shared between all buffers and views derived from the same
/// allocation, always behind an `Rc<RefCell<dyn ByteStore>>`.
pub trait ByteStore {
    /// size of the region in bytes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// true if the region is not managed as a Vec
    fn is_direct(&self) -> bool;

    /// get the bytes of the region
    fn bytes(&self) -> &[u8];

    /// get the mutable bytes of the region
    fn bytes_mut(&mut self) -> &mut [u8];

    /// move `len` bytes from `src` to `dst` inside the region
    ///
    /// source and destination may overlap.
    fn move_bytes(&mut self, src: usize, dst: usize, len: usize);
}
