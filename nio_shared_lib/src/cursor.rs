use crate::error::{ErrorType, Result};
use crate::field_types::Mark;
use crate::helper::range_helper::check_index;

/// mark/position/limit/capacity bookkeeping shared by all buffer types
///
/// Invariant: `mark <= position <= limit <= capacity`.
/// Every mutator validates its argument before changing any field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor {
    mark: Mark,
    position: usize,
    limit: usize,
    capacity: usize,
}

impl Cursor {

    /// position 0, limit at capacity, no mark
    pub fn new(capacity: usize) -> Cursor {
        Cursor {
            mark: None,
            position: 0,
            limit: capacity,
            capacity,
        }
    }

    /// fails unless `mark <= position <= limit <= capacity`
    pub fn from_parts(mark: Mark, position: usize, limit: usize, capacity: usize) -> Result<Cursor> {
        if limit > capacity {
            return Err(ErrorType::IllegalArgument { value: limit, bound: capacity });
        }
        if position > limit {
            return Err(ErrorType::IllegalArgument { value: position, bound: limit });
        }
        if let Some(m) = mark {
            if m > position {
                return Err(ErrorType::IllegalArgument { value: m, bound: position });
            }
        }
        Ok(Cursor {
            mark,
            position,
            limit,
            capacity,
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// discards the mark if it is beyond the new position
    pub fn set_position(&mut self, new_position: usize) -> Result<()> {
        if new_position > self.limit {
            return Err(ErrorType::IllegalArgument { value: new_position, bound: self.limit });
        }
        if matches!(self.mark, Some(m) if m > new_position) {
            self.mark = None;
        }
        self.position = new_position;
        self.debug_check();
        Ok(())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// pulls position and mark back if they are beyond the new limit
    pub fn set_limit(&mut self, new_limit: usize) -> Result<()> {
        if new_limit > self.capacity {
            return Err(ErrorType::IllegalArgument { value: new_limit, bound: self.capacity });
        }
        self.limit = new_limit;
        if self.position > new_limit {
            self.position = new_limit;
        }
        if matches!(self.mark, Some(m) if m > new_limit) {
            self.mark = None;
        }
        self.debug_check();
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// set the mark at the current position
    pub fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// move position back to the mark
    pub fn reset(&mut self) -> Result<()> {
        match self.mark {
            Some(m) => {
                self.position = m;
                Ok(())
            }
            None => Err(ErrorType::InvalidMark),
        }
    }

    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
    }

    /// limit at position, position at 0
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
        self.mark = None;
    }

    pub fn rewind(&mut self) {
        self.position = 0;
        self.mark = None;
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    pub fn mark_value(&self) -> Mark {
        self.mark
    }

    pub fn discard_mark(&mut self) {
        self.mark = None;
    }

    /// returns the current position and advances it by one
    pub fn next_get_index(&mut self) -> Result<usize> {
        self.next_index()
    }

    /// returns the current position and advances it by one
    pub fn next_put_index(&mut self) -> Result<usize> {
        self.next_index()
    }

    fn next_index(&mut self) -> Result<usize> {
        if self.position >= self.limit {
            return Err(ErrorType::OutOfBounds { index: self.position, bound: self.limit });
        }
        let index = self.position;
        self.position += 1;
        Ok(index)
    }

    /// check that `i` is inside `[0, limit)`
    pub fn check_index(&self, i: usize) -> Result<usize> {
        check_index(i, self.limit)
    }

    /// check that `n` more elements fit between position and limit
    pub fn check_available(&self, n: usize) -> Result<()> {
        if n > self.remaining() {
            Err(ErrorType::OutOfBounds { index: self.position + n, bound: self.limit })
        } else {
            Ok(())
        }
    }

    fn debug_check(&self) {
        debug_assert!(self.position <= self.limit, "position {} > limit {}", self.position, self.limit);
        debug_assert!(self.limit <= self.capacity, "limit {} > capacity {}", self.limit, self.capacity);
        debug_assert!(self.mark.map_or(true, |m| m <= self.position), "mark {:?} > position {}", self.mark, self.position);
    }
}

/// Mutable access to a buffer's Cursor that only allows validated moves.
///
/// The cursor itself can not be replaced through this handle, so the
/// capacity of a buffer stays fixed.
pub struct CursorMut<'a> {
    inner: &'a mut Cursor,
}

impl<'a> CursorMut<'a> {
    pub fn new(inner: &'a mut Cursor) -> CursorMut<'a> {
        CursorMut {
            inner
        }
    }

    pub fn set_position(self, new_position: usize) -> Result<()> {
        self.inner.set_position(new_position)
    }

    pub fn set_limit(self, new_limit: usize) -> Result<()> {
        self.inner.set_limit(new_limit)
    }

    pub fn mark(self) {
        self.inner.mark()
    }

    pub fn reset(self) -> Result<()> {
        self.inner.reset()
    }

    pub fn clear(self) {
        self.inner.clear()
    }

    pub fn flip(self) {
        self.inner.flip()
    }

    pub fn rewind(self) {
        self.inner.rewind()
    }
}

/// Common cursor surface of byte buffers and typed views.
///
/// Implementors only provide access to their `Cursor` and storage flags.
pub trait Buffer {
    fn cursor(&self) -> &Cursor;

    fn cursor_mut(&mut self) -> CursorMut<'_>;

    fn is_read_only(&self) -> bool;

    fn is_direct(&self) -> bool;

    fn capacity(&self) -> usize {
        self.cursor().capacity()
    }

    fn position(&self) -> usize {
        self.cursor().position()
    }

    fn set_position(&mut self, new_position: usize) -> Result<()> {
        self.cursor_mut().set_position(new_position)
    }

    fn limit(&self) -> usize {
        self.cursor().limit()
    }

    fn set_limit(&mut self, new_limit: usize) -> Result<()> {
        self.cursor_mut().set_limit(new_limit)
    }

    fn mark(&mut self) {
        self.cursor_mut().mark()
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor_mut().reset()
    }

    fn clear(&mut self) {
        self.cursor_mut().clear()
    }

    fn flip(&mut self) {
        self.cursor_mut().flip()
    }

    fn rewind(&mut self) {
        self.cursor_mut().rewind()
    }

    fn remaining(&self) -> usize {
        self.cursor().remaining()
    }

    fn has_remaining(&self) -> bool {
        self.cursor().has_remaining()
    }

    fn mark_value(&self) -> Mark {
        self.cursor().mark_value()
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{Cursor, CursorMut};
    use crate::error::ErrorType;
    use test_case::test_case;

    #[test]
    fn from_parts_validates() {
        let c = Cursor::from_parts(Some(1), 2, 3, 4).unwrap();
        assert_eq!((c.mark_value(), c.position(), c.limit(), c.capacity()), (Some(1), 2, 3, 4));
        assert_eq!(Cursor::from_parts(None, 0, 5, 4), Err(ErrorType::IllegalArgument { value: 5, bound: 4 }));
        assert_eq!(Cursor::from_parts(None, 4, 3, 4), Err(ErrorType::IllegalArgument { value: 4, bound: 3 }));
        assert_eq!(Cursor::from_parts(Some(3), 2, 3, 4), Err(ErrorType::IllegalArgument { value: 3, bound: 2 }));
    }

    #[test]
    fn cursor_mut_keeps_capacity() {
        let mut c = Cursor::new(4);
        CursorMut::new(&mut c).set_position(3).unwrap();
        assert_eq!(CursorMut::new(&mut c).set_limit(1000), Err(ErrorType::IllegalArgument { value: 1000, bound: 4 }));
        CursorMut::new(&mut c).flip();
        assert_eq!((c.position(), c.limit(), c.capacity()), (0, 3, 4));
    }

    #[test]
    fn new_cursor() {
        let c = Cursor::new(8);
        assert_eq!(c.position(), 0);
        assert_eq!(c.limit(), 8);
        assert_eq!(c.capacity(), 8);
        assert_eq!(c.mark_value(), None);
    }

    #[test]
    fn set_position_discards_mark() {
        let mut c = Cursor::new(8);
        c.set_position(4).unwrap();
        c.mark();
        c.set_position(5).unwrap();
        assert_eq!(c.mark_value(), Some(4));
        c.set_position(3).unwrap();
        assert_eq!(c.mark_value(), None);
    }

    #[test]
    fn set_position_past_limit() {
        let mut c = Cursor::new(8);
        c.set_limit(4).unwrap();
        assert_eq!(c.set_position(5), Err(ErrorType::IllegalArgument { value: 5, bound: 4 }));
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn set_limit_pulls_position_back() {
        let mut c = Cursor::new(8);
        c.set_position(6).unwrap();
        c.mark();
        c.set_limit(3).unwrap();
        assert_eq!(c.position(), 3);
        assert_eq!(c.mark_value(), None);
        assert_eq!(c.set_limit(9), Err(ErrorType::IllegalArgument { value: 9, bound: 8 }));
    }

    #[test]
    fn mark_reset() {
        let mut c = Cursor::new(8);
        assert_eq!(c.reset(), Err(ErrorType::InvalidMark));
        c.set_position(2).unwrap();
        c.mark();
        c.set_position(7).unwrap();
        c.reset().unwrap();
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn flip_clear_rewind() {
        let mut c = Cursor::new(8);
        c.set_position(5).unwrap();
        c.flip();
        assert_eq!((c.position(), c.limit()), (0, 5));
        c.set_position(2).unwrap();
        c.rewind();
        assert_eq!((c.position(), c.limit()), (0, 5));
        c.clear();
        assert_eq!((c.position(), c.limit()), (0, 8));
    }

    #[test]
    fn next_index_stops_at_limit() {
        let mut c = Cursor::new(2);
        assert_eq!(c.next_get_index(), Ok(0));
        assert_eq!(c.next_put_index(), Ok(1));
        assert_eq!(c.next_get_index(), Err(ErrorType::OutOfBounds { index: 2, bound: 2 }));
        assert_eq!(c.position(), 2);
    }

    #[test_case(0, true; "first")]
    #[test_case(3, true; "last")]
    #[test_case(4, false; "at limit")]
    #[test_case(100, false; "far beyond")]
    fn check_index(i: usize, ok: bool) {
        let mut c = Cursor::new(8);
        c.set_limit(4).unwrap();
        assert_eq!(c.check_index(i).is_ok(), ok);
    }

    #[test]
    fn check_available() {
        let mut c = Cursor::new(8);
        c.set_position(6).unwrap();
        assert!(c.check_available(2).is_ok());
        assert_eq!(c.check_available(3), Err(ErrorType::OutOfBounds { index: 9, bound: 8 }));
    }
}
