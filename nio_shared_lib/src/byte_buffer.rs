use crate::byte_order::ByteOrder;
use crate::constants::DEFAULT_BYTE_ORDER;
use crate::cursor::{Buffer, Cursor, CursorMut};
use crate::element::Element;
use crate::error::{ErrorType, Result};
use crate::field_types::ByteIndex;
use crate::general::byte_store::ByteStore;
use crate::general::direct_store::DirectStore;
use crate::general::heap_store::HeapStore;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// A byte oriented buffer over a shared ByteStore.
///
/// Cloning the handle (`duplicate`, `slice`, `as_read_only_buffer`) never
/// copies bytes; all handles see each other's writes immediately.
/// Byte indices passed to this type are relative to its own `offset` in the store.
pub struct ByteBuffer {
    cursor: Cursor,
    store: Rc<RefCell<dyn ByteStore>>,
    offset: ByteIndex,
    order: ByteOrder,
    read_only: bool,
}

impl ByteBuffer {

    /// zero filled heap buffer
    pub fn allocate(capacity: usize) -> ByteBuffer {
        crate::log_store_allocated!("heap", capacity);
        Self::from_store(HeapStore::new(capacity))
    }

    /// zero filled buffer outside of any Vec
    pub fn allocate_direct(capacity: usize) -> ByteBuffer {
        crate::log_store_allocated!("direct", capacity);
        Self::from_store(DirectStore::new(capacity))
    }

    /// takes ownership of the bytes, no copy
    pub fn wrap(buf: Vec<u8>) -> ByteBuffer {
        Self::from_store(HeapStore::from(buf))
    }

    pub fn from_store<S: ByteStore + 'static>(store: S) -> ByteBuffer {
        let capacity = store.len();
        ByteBuffer {
            cursor: Cursor::new(capacity),
            store: Rc::new(RefCell::new(store)),
            offset: 0,
            order: DEFAULT_BYTE_ORDER,
            read_only: false,
        }
    }

    fn derive(&self, cursor: Cursor, offset: ByteIndex, read_only: bool) -> ByteBuffer {
        ByteBuffer {
            cursor,
            store: Rc::clone(&self.store),
            offset,
            order: self.order,
            read_only,
        }
    }

    /// new buffer over `[position, limit)` of this one
    pub fn slice(&self) -> ByteBuffer {
        let cursor = Cursor::new(self.remaining());
        self.derive(cursor, self.offset + self.position(), self.read_only)
    }

    /// new buffer with the same cursor state over the same bytes
    pub fn duplicate(&self) -> ByteBuffer {
        self.derive(self.cursor, self.offset, self.read_only)
    }

    /// like `duplicate`, but no write is possible through the result
    pub fn as_read_only_buffer(&self) -> ByteBuffer {
        self.derive(self.cursor, self.offset, true)
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// byte order used by views created from this buffer
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// true if both handles refer to the same store
    pub fn shares_store_with(&self, other: &ByteBuffer) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    pub fn get(&mut self) -> Result<u8> {
        let i = self.cursor.next_get_index()?;
        Ok(self.store.borrow().bytes()[self.offset + i])
    }

    pub fn get_at(&self, i: ByteIndex) -> Result<u8> {
        let i = self.cursor.check_index(i)?;
        Ok(self.store.borrow().bytes()[self.offset + i])
    }

    pub fn put(&mut self, val: u8) -> Result<()> {
        self.check_writable()?;
        let i = self.cursor.next_put_index()?;
        self.store.borrow_mut().bytes_mut()[self.offset + i] = val;
        Ok(())
    }

    pub fn put_at(&mut self, i: ByteIndex, val: u8) -> Result<()> {
        self.check_writable()?;
        let i = self.cursor.check_index(i)?;
        self.store.borrow_mut().bytes_mut()[self.offset + i] = val;
        Ok(())
    }

    /// copy of the bytes between position and limit
    pub fn to_vec(&self) -> Vec<u8> {
        let start = self.offset + self.position();
        let end = self.offset + self.limit();
        self.store.borrow().bytes()[start..end].to_vec()
    }

    /// read one element at byte index `i`, ignoring position and limit
    pub fn get_unchecked<E: Element>(&self, i: ByteIndex, order: ByteOrder) -> E {
        let start = self.offset + i;
        let store = self.store.borrow();
        E::read(&store.bytes()[start..start + E::WIDTH], order)
    }

    /// write one element at byte index `i`, ignoring position and limit
    pub fn put_unchecked<E: Element>(&self, i: ByteIndex, order: ByteOrder, val: E) -> Result<()> {
        self.check_writable()?;
        let start = self.offset + i;
        let mut store = self.store.borrow_mut();
        E::write(&mut store.bytes_mut()[start..start + E::WIDTH], order, val);
        Ok(())
    }

    /// move `len` bytes from byte index `src` to `dst`, ranges may overlap
    pub fn move_unchecked(&self, src: ByteIndex, dst: ByteIndex, len: usize) -> Result<()> {
        self.check_writable()?;
        self.store.borrow_mut().move_bytes(self.offset + src, self.offset + dst, len);
        Ok(())
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            Err(ErrorType::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl Buffer for ByteBuffer {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> CursorMut<'_> {
        CursorMut::new(&mut self.cursor)
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn is_direct(&self) -> bool {
        self.store.borrow().is_direct()
    }
}

impl Debug for ByteBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ByteBuffer {{ cursor: {:?}, offset: {}, order: {}, direct: {}, read_only: {} }}",
            self.cursor,
            self.offset,
            self.order,
            self.is_direct(),
            self.read_only
        )
    }
}
