use nio_shared_lib::byte_buffer::ByteBuffer;
use nio_shared_lib::byte_order::ByteOrder;
use nio_shared_lib::cursor::{Buffer, Cursor, CursorMut};
use nio_shared_lib::element::Element;
use nio_shared_lib::error::{ErrorType, Result};
use nio_shared_lib::field_types::{ByteIndex, ElementIndex, Mark};
use nio_shared_lib::helper::range_helper::check_sub_range;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// View of a ByteBuffer as a sequence of fixed-width elements.
///
/// The view owns only its cursor; the bytes live in the store of `bb` and are
/// shared with the byte buffer and every view derived from it. Element `i`
/// starts at byte `i * E::WIDTH + offset` of `bb`.
pub struct TypedBufferView<E: Element> {
    cursor: Cursor,
    bb: ByteBuffer,
    offset: ByteIndex,
    order: ByteOrder,
    read_only: bool,
    phantom: PhantomData<E>,
}

impl<E: Element> TypedBufferView<E> {

    /// view over `[position, limit)` of `bb`
    ///
    /// trailing bytes that do not fill a whole element are not addressable.
    pub fn new(bb: &ByteBuffer, order: ByteOrder) -> TypedBufferView<E> {
        let capacity = bb.remaining() / E::WIDTH;
        let view = Self::from_parts(bb.duplicate(), None, 0, capacity, capacity, bb.position(), order);
        debug_assert!(view.position() <= view.capacity());
        view
    }

    pub(crate) fn from_parts(
        bb: ByteBuffer,
        mark: Mark,
        position: usize,
        limit: usize,
        capacity: usize,
        offset: ByteIndex,
        order: ByteOrder,
    ) -> TypedBufferView<E> {
        let read_only = bb.is_read_only();
        TypedBufferView {
            cursor: Cursor::from_parts(mark, position, limit, capacity)
                .expect("derived cursor state out of order"),
            bb,
            offset,
            order,
            read_only,
            phantom: PhantomData,
        }
    }

    /// byte index of element `i`
    fn ix(&self, i: ElementIndex) -> ByteIndex {
        i.checked_mul(E::WIDTH)
            .and_then(|b| b.checked_add(self.offset))
            .expect("element byte offset overflows usize")
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// the byte buffer this view reads from
    pub fn byte_buffer(&self) -> &ByteBuffer {
        &self.bb
    }

    /// new view over `[position, limit)`, starting at index 0
    pub fn slice(&self) -> TypedBufferView<E> {
        let pos = self.position();
        let rem = self.remaining();
        let view = Self::from_parts(self.bb.duplicate(), None, 0, rem, rem, self.ix(pos), self.order);
        nio_shared_lib::log_view_derived!("slice", view);
        view
    }

    /// new view with an independent copy of the cursor
    pub fn duplicate(&self) -> TypedBufferView<E> {
        Self::from_parts(
            self.bb.duplicate(),
            self.mark_value(),
            self.position(),
            self.limit(),
            self.capacity(),
            self.offset,
            self.order,
        )
    }

    /// like `duplicate`, but nothing can be written through the result
    pub fn as_read_only_buffer(&self) -> TypedBufferView<E> {
        let view = Self::from_parts(
            self.bb.as_read_only_buffer(),
            self.mark_value(),
            self.position(),
            self.limit(),
            self.capacity(),
            self.offset,
            self.order,
        );
        nio_shared_lib::log_view_derived!("as_read_only_buffer", view);
        view
    }

    /// new view over `[position + start, position + end)` with the same capacity
    pub fn sub_sequence(&self, start: usize, end: usize) -> Result<TypedBufferView<E>> {
        let pos = self.position();
        check_sub_range(start, end, self.remaining())?;
        let view = Self::from_parts(
            self.bb.duplicate(),
            None,
            pos + start,
            pos + end,
            self.capacity(),
            self.offset,
            self.order,
        );
        nio_shared_lib::log_view_derived!("sub_sequence", view);
        Ok(view)
    }

    /// relative read
    pub fn get(&mut self) -> Result<E> {
        let i = self.cursor.next_get_index()?;
        Ok(self.bb.get_unchecked(self.ix(i), self.order))
    }

    /// absolute read, the cursor is not changed
    pub fn get_at(&self, i: ElementIndex) -> Result<E> {
        let i = self.cursor.check_index(i)?;
        Ok(self.bb.get_unchecked(self.ix(i), self.order))
    }

    /// relative write
    pub fn put(&mut self, x: E) -> Result<()> {
        self.check_writable()?;
        let i = self.cursor.next_put_index()?;
        self.bb.put_unchecked(self.ix(i), self.order, x)
    }

    /// absolute write, the cursor is not changed
    pub fn put_at(&mut self, i: ElementIndex, x: E) -> Result<()> {
        self.check_writable()?;
        let i = self.cursor.check_index(i)?;
        self.bb.put_unchecked(self.ix(i), self.order, x)
    }

    /// fill `dst` with the next `dst.len()` elements
    pub fn get_slice(&mut self, dst: &mut [E]) -> Result<()> {
        self.cursor.check_available(dst.len())?;
        for x in dst.iter_mut() {
            *x = self.get()?;
        }
        Ok(())
    }

    /// write all of `src` at the position
    pub fn put_slice(&mut self, src: &[E]) -> Result<()> {
        self.check_writable()?;
        self.cursor.check_available(src.len())?;
        for x in src {
            self.put(*x)?;
        }
        Ok(())
    }

    /// move the remaining elements of `src` into this view
    pub fn put_buffer(&mut self, src: &mut TypedBufferView<E>) -> Result<()> {
        self.check_writable()?;
        self.cursor.check_available(src.remaining())?;
        while src.has_remaining() {
            let x = src.get()?;
            self.put(x)?;
        }
        Ok(())
    }

    /// move `[position, limit)` to the start of the view
    ///
    /// afterwards position is the number of moved elements and limit is the capacity.
    pub fn compact(&mut self) -> Result<()> {
        self.check_writable()?;
        let pos = self.position();
        let rem = self.remaining();
        let len = rem * E::WIDTH;
        self.bb.move_unchecked(self.ix(pos), self.ix(0), len)?;
        nio_shared_lib::log_compacted!(len, self.bb.is_direct());
        let capacity = self.capacity();
        self.cursor.set_limit(capacity)?;
        self.cursor.set_position(rem)?;
        self.cursor.discard_mark();
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

impl<E: Element> Buffer for TypedBufferView<E> {
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
        self.bb.is_direct()
    }
}

impl<E: Element> Debug for TypedBufferView<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TypedBufferView<{}> {{ cursor: {:?}, offset: {}, order: {}, read_only: {} }}",
            std::any::type_name::<E>(),
            self.cursor,
            self.offset,
            self.order,
            self.read_only
        )
    }
}
