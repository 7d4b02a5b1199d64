pub mod range_helper;
