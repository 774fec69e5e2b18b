use super::{Coordinates, GeometryTrait};
use crate::{error::ValidationResult, validators::validate_ring};
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// A closed linear ring, the boundary of a polygon or one of its holes.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// At least 4 valid positions, first equal to last.
	fn verify(&self) -> ValidationResult<()> {
		validate_ring(&self.0)
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}

	fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(callback);
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
