//! Validated geometry schemas with three interchangeable codecs.
//!
//! A [`schema::Schema`] validates geometry values and moves them between their in-memory form,
//! a GeoJSON tree ([`JsonValue`](geoschema_core::json::JsonValue)), text (WKT) and binary (WKB).
//!
//! ```rust
//! use geoschema::schema::{PointSchema, Schema};
//!
//! let schema = PointSchema::new();
//! let point = schema.str_decode("POINT (100 0)").unwrap();
//! assert_eq!(schema.str_encode(&point).unwrap(), "POINT (100 0)");
//!
//! let wkb = schema.bin_encode(&point).unwrap();
//! assert_eq!(schema.bin_decode(&wkb).unwrap(), point);
//!
//! assert!(schema.str_decode("POINT (-190 0)").is_err());
//! ```

pub mod error;
pub mod geo;
pub mod geojson;
pub mod schema;
pub mod validators;
pub mod wkb;
pub mod wkt;

pub use error::{ConfigurationError, ValidationError, ValidationResult};
