use crate::{error::ValidationResult, validators::validate_position};
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// A position: `longitude, latitude` and an optional elevation.
///
/// The numbers are kept as a sequence, so a position with the wrong arity can be constructed
/// and is then rejected by [`Coordinates::verify`].
#[derive(Clone, PartialEq)]
pub struct Coordinates(pub Vec<f64>);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self(vec![x, y])
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self(vec![x, y, z])
	}

	/// Number of stored values, 2 or 3 for a valid position.
	#[must_use]
	pub fn dimensions(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	pub fn verify(&self) -> ValidationResult<()> {
		validate_position(&self.0)
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from(&self.0)
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates(vec![value[0].into(), value[1].into()])
	}
}

impl<'a, T> From<&'a [T; 3]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 3]) -> Self {
		Coordinates(vec![value[0].into(), value[1].into(), value[2].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value.to_vec())
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates(value.to_vec())
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<Vec<f64>> for Coordinates {
	fn from(value: Vec<f64>) -> Self {
		Coordinates(value)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		value.clone()
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
