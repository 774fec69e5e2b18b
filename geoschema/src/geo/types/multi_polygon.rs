use super::{Coordinates, GeometryTrait, PolygonGeometry, PolygonOptions};
use crate::error::{ResultPathExt, ValidationResult};
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	/// Every member polygon obeys the same ring-count bounds.
	pub fn verify_with(&self, options: &PolygonOptions) -> ValidationResult<()> {
		for (index, polygon) in self.0.iter().enumerate() {
			polygon.verify_with(options).at_index(index)?;
		}
		Ok(())
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> ValidationResult<()> {
		self.verify_with(&PolygonOptions::default())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(PolygonGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for polygon in &self.0 {
			polygon.for_each_position(callback);
		}
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn member_options() {
		let polygons = MultiPolygonGeometry::from(vec![
			vec![vec![[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 3.0], [102.0, 2.0]]],
			vec![
				vec![[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
				vec![[100.2, 0.2], [100.2, 0.8], [100.8, 0.8], [100.8, 0.2], [100.2, 0.2]],
			],
		]);
		assert!(polygons.verify().is_ok());

		let error = polygons.verify_with(&PolygonOptions::new(1, Some(1)).unwrap()).unwrap_err();
		assert_eq!(error.pointer(), "/1");
		assert!(error.message().contains("at most 1 ring(s)"));
	}
}
