// The building blocks of every geometry: positions, their sequences and the nested sequences
// that make up polygons and multi geometries. Each type checks its own shape in `verify` and
// reports failures with a pointer relative to itself; callers prepend the enclosing path.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
