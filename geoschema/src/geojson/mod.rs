//! The interchange codec: GeoJSON trees (<https://datatracker.ietf.org/doc/html/rfc7946>).
//!
//! Decoding checks structure and the discriminator, reporting failures with a pointer into
//! the document. Domain rules are left to the schemas, which validate every decoded value.

mod decode;
mod encode;
mod read;

pub use decode::*;
pub use encode::*;
pub use read::*;
