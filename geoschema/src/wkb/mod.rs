//! The binary codec: Well-Known Binary.
//!
//! Every geometry, including each member of a multi-geometry or collection, starts with a byte
//! order marker (`0` big endian, `1` little endian) and a `u32` type code. Z coordinates are
//! read from ISO codes (`1001..=1007`) and from the EWKB Z flag. An EWKB SRID is skipped.
//! Measured (M) coordinates are rejected.
//!
//! Output is always little endian with ISO codes and carries no bbox.

mod read;
mod write;

pub use read::*;
pub use write::*;

const BIG_ENDIAN: u8 = 0;
const LITTLE_ENDIAN: u8 = 1;

const ISO_Z_OFFSET: u32 = 1000;

const EWKB_Z: u32 = 0x8000_0000;
const EWKB_M: u32 = 0x4000_0000;
const EWKB_SRID: u32 = 0x2000_0000;
const EWKB_FLAGS: u32 = EWKB_Z | EWKB_M | EWKB_SRID;
