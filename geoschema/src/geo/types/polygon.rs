use super::{Coordinates, GeometryTrait, RingGeometry};
use crate::{
	bail_invalid,
	error::{ConfigurationError, ResultPathExt, ValidationResult},
};
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// Bounds on the number of rings (exterior plus holes) of a polygon.
///
/// The default accepts one or more rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonOptions {
	min_rings: usize,
	max_rings: Option<usize>,
}

impl PolygonOptions {
	/// Fails unless `min_rings >= 1` and `max_rings`, when set, is at least `min_rings`.
	pub fn new(min_rings: usize, max_rings: Option<usize>) -> Result<Self, ConfigurationError> {
		if min_rings < 1 {
			return Err(ConfigurationError::MinRings(min_rings));
		}
		if let Some(max) = max_rings
			&& max < min_rings
		{
			return Err(ConfigurationError::MaxRings { min: min_rings, max });
		}
		Ok(PolygonOptions { min_rings, max_rings })
	}

	#[must_use]
	pub fn min_rings(&self) -> usize {
		self.min_rings
	}

	#[must_use]
	pub fn max_rings(&self) -> Option<usize> {
		self.max_rings
	}

	fn check_ring_count(&self, count: usize) -> ValidationResult<()> {
		if count < self.min_rings {
			bail_invalid!("a polygon must have at least {} ring(s), found {count}", self.min_rings);
		}
		if let Some(max) = self.max_rings
			&& count > max
		{
			bail_invalid!("a polygon must have at most {max} ring(s), found {count}");
		}
		Ok(())
	}
}

impl Default for PolygonOptions {
	fn default() -> Self {
		PolygonOptions {
			min_rings: 1,
			max_rings: None,
		}
	}
}

/// An exterior ring followed by any number of holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Checks the ring count against `options`, then every ring.
	pub fn verify_with(&self, options: &PolygonOptions) -> ValidationResult<()> {
		options.check_ring_count(self.0.len())?;
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().at_index(index)?;
		}
		Ok(())
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> ValidationResult<()> {
		self.verify_with(&PolygonOptions::default())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(RingGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for ring in &self.0 {
			ring.for_each_position(callback);
		}
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn square(offset: f64, size: f64) -> Vec<[f64; 2]> {
		vec![
			[offset, offset],
			[offset + size, offset],
			[offset + size, offset + size],
			[offset, offset + size],
			[offset, offset],
		]
	}

	// ── options ─────────────────────────────────────────────────────────

	#[test]
	fn options() {
		assert_eq!(PolygonOptions::default(), PolygonOptions::new(1, None).unwrap());
		assert_eq!(PolygonOptions::new(0, None), Err(ConfigurationError::MinRings(0)));
		assert_eq!(
			PolygonOptions::new(2, Some(1)),
			Err(ConfigurationError::MaxRings { min: 2, max: 1 })
		);
		let options = PolygonOptions::new(2, Some(2)).unwrap();
		assert_eq!(options.min_rings(), 2);
		assert_eq!(options.max_rings(), Some(2));
	}

	// ── verify ──────────────────────────────────────────────────────────

	#[test]
	fn with_hole() {
		let polygon = PolygonGeometry::from(vec![square(0.0, 10.0), square(2.0, 2.0)]);
		assert!(polygon.verify().is_ok());
	}

	#[test]
	fn without_rings() {
		let error = PolygonGeometry(vec![]).verify().unwrap_err();
		assert_eq!(error.message(), "a polygon must have at least 1 ring(s), found 0");
	}

	#[test]
	fn ring_count_bounds() {
		let one = PolygonGeometry::from(vec![square(0.0, 10.0)]);
		let two = PolygonGeometry::from(vec![square(0.0, 10.0), square(2.0, 2.0)]);

		let at_least_two = PolygonOptions::new(2, None).unwrap();
		assert!(one.verify_with(&at_least_two).unwrap_err().message().contains("at least 2 ring(s)"));
		assert!(two.verify_with(&at_least_two).is_ok());

		let at_most_one = PolygonOptions::new(1, Some(1)).unwrap();
		assert!(one.verify_with(&at_most_one).is_ok());
		assert_eq!(
			two.verify_with(&at_most_one).unwrap_err().message(),
			"a polygon must have at most 1 ring(s), found 2"
		);
	}

	#[test]
	fn unclosed_hole_is_cited() {
		let mut hole = square(2.0, 2.0);
		hole.pop();
		let error = PolygonGeometry::from(vec![square(0.0, 10.0), hole]).verify().unwrap_err();
		assert_eq!(error.pointer(), "/1");
		assert!(error.message().contains("closed"));
	}
}
