pub mod constants;
pub mod error;
pub mod field_types;
pub mod byte_order;
pub mod element;
pub mod cursor;
pub mod byte_buffer;
pub mod general;
pub mod helper;
pub mod logger;
