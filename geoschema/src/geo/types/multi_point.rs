use super::{Coordinates, GeometryTrait, PointGeometry};
use crate::error::{ResultPathExt, ValidationResult};
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// Any number of points, including none.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> ValidationResult<()> {
		for (index, point) in self.0.iter().enumerate() {
			point.verify().at_index(index)?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(PointGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for point in &self.0 {
			point.for_each_position(callback);
		}
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
