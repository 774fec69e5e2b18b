use super::{Coordinates, GeometryTrait};
use crate::{ensure_valid, error::ResultPathExt, error::ValidationResult};
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// A connected sequence of at least two positions.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn verify(&self) -> ValidationResult<()> {
		for (index, position) in self.0.iter().enumerate() {
			position.verify().at_index(index)?;
		}
		ensure_valid!(
			self.0.len() >= 2,
			"a line string must have at least 2 positions, found {}",
			self.0.len()
		);
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}

	fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(callback);
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
