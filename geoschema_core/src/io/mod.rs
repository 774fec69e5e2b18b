//! Endian-aware readers and writers for binary encodings.
//!
//! [`ValueReader`] and [`ValueWriter`] are generic over a `byteorder::ByteOrder`, so the same
//! decoding routine can be instantiated for little- and big-endian input.

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_vec;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_vec::*;
