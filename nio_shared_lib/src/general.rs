pub mod byte_store;
pub mod heap_store;
pub mod direct_store;
