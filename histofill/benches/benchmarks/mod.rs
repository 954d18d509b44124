pub mod fill;
pub mod slice;
