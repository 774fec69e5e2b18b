//! Byte-level tokenizing for the text formats (JSON and WKT).

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
