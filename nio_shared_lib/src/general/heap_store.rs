use crate::general::byte_store::ByteStore;

/// A ByteStore backed by a Vec
#[derive(Debug, Clone, Default)]
pub struct HeapStore {
    buf: Vec<u8>,
}

impl HeapStore {
    /// zero filled
    pub fn new(len: usize) -> HeapStore {
        HeapStore {
            buf: vec![0u8; len],
        }
    }
}

impl From<Vec<u8>> for HeapStore {
    fn from(buf: Vec<u8>) -> Self {
        HeapStore {
            buf
        }
    }
}

impl Into<Vec<u8>> for HeapStore {
    fn into(self) -> Vec<u8> {
        self.buf
    }
}

impl ByteStore for HeapStore {
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn is_direct(&self) -> bool {
        false
    }

    fn bytes(&self) -> &[u8] {
        &self.buf
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    fn move_bytes(&mut self, src: usize, dst: usize, len: usize) {
        self.buf.copy_within(src..src + len, dst);
    }
}

#[cfg(test)]
mod tests {
    use crate::general::heap_store::HeapStore;
    use crate::general::byte_store::ByteStore;

    #[test]
    fn overlapping_move() {
        let mut store = HeapStore::from(vec![1, 2, 3, 4, 5, 6]);
        store.move_bytes(1, 0, 4);
        assert_eq!(store.bytes(), &[2, 3, 4, 5, 5, 6]);
        store.move_bytes(0, 2, 4);
        assert_eq!(store.bytes(), &[2, 3, 2, 3, 4, 5]);
        assert!(!store.is_direct());
        let buf: Vec<u8> = store.into();
        assert_eq!(buf.len(), 6);
    }
}
