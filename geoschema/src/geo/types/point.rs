use super::{Coordinates, GeometryTrait};
use crate::error::ValidationResult;
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// A single position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> ValidationResult<()> {
		self.0.verify()
	}

	fn to_coord_json(&self) -> JsonValue {
		self.0.to_json()
	}

	fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates)) {
		callback(&self.0);
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
