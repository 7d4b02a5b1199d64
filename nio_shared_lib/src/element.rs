use crate::byte_order::ByteOrder;
use byteorder::{BigEndian, LittleEndian, ByteOrder as _};
use std::fmt::Debug;
use std::mem::size_of;

/// A fixed-width value that can be stored in a ByteBuffer.
///
/// `read` and `write` get a slice of exactly `WIDTH` bytes.
pub trait Element: Copy + Default + PartialEq + Debug + 'static {
    /// size of one element in bytes
    const WIDTH: usize;

    fn read(buf: &[u8], order: ByteOrder) -> Self;

    fn write(buf: &mut [u8], order: ByteOrder, val: Self);
}

macro_rules! impl_element {
    ($t:ty, $read:ident, $write:ident) => {
        impl Element for $t {
            const WIDTH: usize = size_of::<$t>();

            fn read(buf: &[u8], order: ByteOrder) -> Self {
                match order {
                    ByteOrder::BigEndian => BigEndian::$read(buf),
                    ByteOrder::LittleEndian => LittleEndian::$read(buf),
                }
            }

            fn write(buf: &mut [u8], order: ByteOrder, val: Self) {
                match order {
                    ByteOrder::BigEndian => BigEndian::$write(buf, val),
                    ByteOrder::LittleEndian => LittleEndian::$write(buf, val),
                }
            }
        }
    };
}

impl_element!(u16, read_u16, write_u16);
impl_element!(i16, read_i16, write_i16);
impl_element!(u32, read_u32, write_u32);
impl_element!(i32, read_i32, write_i32);
impl_element!(u64, read_u64, write_u64);
impl_element!(i64, read_i64, write_i64);
impl_element!(f32, read_f32, write_f32);
impl_element!(f64, read_f64, write_f64);
