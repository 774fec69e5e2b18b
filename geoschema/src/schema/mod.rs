//! Schemas validate values and convert them between their representations.
//!
//! Every geometry schema implements [`GeometrySchema`] and, through it, [`Schema`] with the
//! three codecs: GeoJSON trees, WKT text and WKB bytes. Features and feature collections
//! implement [`Schema`] directly and use GeoJSON text for both the text and binary forms.

mod context;
mod feature;
mod feature_collection;
mod geometry;
mod geometry_collection;
mod registry;
mod traits;

pub use context::*;
pub use feature::*;
pub use feature_collection::*;
pub use geometry::*;
pub use geometry_collection::*;
pub use registry::*;
pub use traits::*;

/// Default ceiling for nested geometry collections.
pub const DEFAULT_MAX_DEPTH: usize = 32;
