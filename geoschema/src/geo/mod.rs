#![allow(clippy::module_inception)]

mod collection;
mod feature;
mod geometry;
mod geometry_type;
mod types;
mod value;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
pub use geometry_type::*;
pub use types::*;
pub use value::*;
