use std::fmt::{Display, Formatter};

/// Runtime byte order tag of a buffer or view
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// most significant byte first
    BigEndian,
    /// least significant byte first
    LittleEndian,
}

impl ByteOrder {

    /// the byte order of the host
    pub fn native() -> ByteOrder {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    pub fn swapped(self) -> ByteOrder {
        match self {
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        crate::constants::DEFAULT_BYTE_ORDER
    }
}

impl Display for ByteOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::BigEndian => write!(f, "BIG_ENDIAN"),
            ByteOrder::LittleEndian => write!(f, "LITTLE_ENDIAN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::byte_order::ByteOrder;

    #[test]
    fn swapped() {
        assert_eq!(ByteOrder::BigEndian.swapped(), ByteOrder::LittleEndian);
        assert_eq!(ByteOrder::native().swapped().swapped(), ByteOrder::native());
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }
}
