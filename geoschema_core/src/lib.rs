//! Format plumbing shared by the geoschema crates.
//!
//! * [`byte_iterator`]: a peekable byte tokenizer plus small parsing helpers, used by the JSON
//!   and WKT readers.
//! * [`json`]: a JSON value tree that serves as the interchange representation of geometries.
//! * [`io`]: endian-aware value readers and writers used by the WKB codec.

pub mod byte_iterator;
pub mod io;
pub mod json;
