//! The text codec: Well-Known Text.
//!
//! ```text
//! POINT (100 0)
//! POLYGON Z ((0 0 1, 1 0 1, 1 1 1, 0 0 1))
//! MULTIPOINT ((100 0), (101 1))
//! GEOMETRYCOLLECTION (POINT (100 0), LINESTRING (101 0, 102 1))
//! MULTIPOLYGON EMPTY
//! ```
//!
//! Keywords are case-insensitive on input and upper case on output. A bbox has no WKT form
//! and is dropped.
//!
//! Elevations are not range checked, so a valid value may hold an infinite or NaN elevation.
//! WKT has no spelling for those and [`write_wkt`] rejects them, while WKB carries them.
//!
//! Numbers follow the JSON number grammar, so `.5` and `1.` are rejected; write `0.5`
//! and `1` instead. A leading `+` is accepted.

mod read;
mod write;

pub use read::*;
pub use write::*;
