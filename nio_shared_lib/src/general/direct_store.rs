use crate::general::byte_store::ByteStore;
use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::fmt::{Debug, Formatter};
use std::ptr::{self, NonNull};
use std::slice;

/// A ByteStore allocated directly from the global allocator
///
/// The region is zero filled and never reallocated.
pub struct DirectStore {
    ptr: NonNull<u8>,
    len: usize,
}

impl DirectStore {
    pub fn new(len: usize) -> DirectStore {
        if len == 0 {
            return DirectStore {
                ptr: NonNull::dangling(),
                len,
            };
        }
        let layout = Self::layout(len);
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).unwrap_or_else(|| handle_alloc_error(layout));
        DirectStore {
            ptr,
            len,
        }
    }

    fn layout(len: usize) -> Layout {
        Layout::array::<u8>(len).expect("direct store too large")
    }
}

impl ByteStore for DirectStore {
    fn len(&self) -> usize {
        self.len
    }

    fn is_direct(&self) -> bool {
        true
    }

    fn bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn move_bytes(&mut self, src: usize, dst: usize, len: usize) {
        assert!(src + len <= self.len && dst + len <= self.len, "move out of range");
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(src), base.add(dst), len);
        }
    }
}

impl Drop for DirectStore {
    fn drop(&mut self) {
        if self.len != 0 {
            unsafe { dealloc(self.ptr.as_ptr(), Self::layout(self.len)) }
        }
    }
}

impl Debug for DirectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DirectStore {{ address: {:p}, len: {} }}", self.ptr, self.len)
    }
}
