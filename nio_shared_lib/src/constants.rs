use crate::byte_order::ByteOrder;
use std::mem::size_of;

/// byte order of a freshly allocated or wrapped ByteBuffer
pub const DEFAULT_BYTE_ORDER: ByteOrder = ByteOrder::BigEndian;

/// the width of one UTF-16 code unit in bytes
pub const CHAR_WIDTH: usize = size_of::<u16>();
