use super::Coordinates;
use crate::error::ValidationResult;
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// Shared interface of the geometry building blocks.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Checks the shape rules of this geometry and every position it contains.
	///
	/// Error pointers are relative to the coordinate array of this geometry.
	fn verify(&self) -> ValidationResult<()>;

	/// The GeoJSON `coordinates` member of this geometry.
	fn to_coord_json(&self) -> JsonValue;

	/// Visits every position in document order.
	fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates));
}
