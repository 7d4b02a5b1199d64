use crate::typed_view::TypedBufferView;
use nio_shared_lib::cursor::Buffer;
use nio_shared_lib::error::{ErrorType, Result};
use nio_shared_lib::helper::range_helper::{check_index, check_sub_range};
use std::fmt::{Display, Formatter};

/// A view of UTF-16 code units
pub type CharBufferView = TypedBufferView<u16>;

impl TypedBufferView<u16> {

    /// number of code units between position and limit
    pub fn length(&self) -> usize {
        self.remaining()
    }

    /// code unit at `i`, relative to the position
    pub fn char_at(&self, i: usize) -> Result<u16> {
        let i = check_index(i, self.length())?;
        self.get_at(self.position() + i)
    }

    /// copy of the code units in `[start, end)`, absolute indices
    pub fn to_units(&self, start: usize, end: usize) -> Result<Vec<u16>> {
        check_sub_range(start, end, self.limit())?;
        let limit = self.limit();
        self.drain_range(start, end)
            .map_err(|_| ErrorType::OutOfBounds { index: end, bound: limit })
    }

    fn drain_range(&self, start: usize, end: usize) -> Result<Vec<u16>> {
        let mut units = vec![0u16; end - start];
        let mut dup = self.duplicate();
        dup.set_limit(end)?;
        dup.set_position(start)?;
        dup.get_slice(&mut units)?;
        Ok(units)
    }

    /// decoded copy of `[start, end)`, unpaired surrogates become U+FFFD
    pub fn to_string_range(&self, start: usize, end: usize) -> Result<String> {
        let units = self.to_units(start, end)?;
        Ok(String::from_utf16_lossy(&units))
    }
}

impl Display for TypedBufferView<u16> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self.to_string_range(self.position(), self.limit()).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}
