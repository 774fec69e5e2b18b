//! Leaf validators shared by every geometry schema.

use crate::{
	bail_invalid, ensure_valid,
	error::{ResultPathExt, ValidationResult},
	geo::Coordinates,
};

/// Checks one position: 2 or 3 numbers, longitude in `[-180, 180]`, latitude in `[-90, 90]`.
///
/// The optional third number (elevation) is not constrained. NaN fails the range checks.
pub fn validate_position(position: &[f64]) -> ValidationResult<()> {
	ensure_valid!(
		matches!(position.len(), 2 | 3),
		"a position must have 2 or 3 numbers, found {}",
		position.len()
	);
	let longitude = position[0];
	let latitude = position[1];
	ensure_valid!(
		(-180.0..=180.0).contains(&longitude),
		"longitude {longitude} is outside [-180, 180]"
	);
	ensure_valid!(
		(-90.0..=90.0).contains(&latitude),
		"latitude {latitude} is outside [-90, 90]"
	);
	Ok(())
}

/// Checks a linear ring: every position valid, at least 4 of them, first equal to last.
pub fn validate_ring(ring: &[Coordinates]) -> ValidationResult<()> {
	for (index, position) in ring.iter().enumerate() {
		validate_position(position.as_slice()).at_index(index)?;
	}
	ensure_valid!(
		ring.len() >= 4,
		"a linear ring must have at least 4 positions, found {}",
		ring.len()
	);
	if let (Some(first), Some(last)) = (ring.first(), ring.last())
		&& first != last
	{
		bail_invalid!("a linear ring must be closed, but starts at {first:?} and ends at {last:?}");
	}
	Ok(())
}

/// A bbox holds 4 numbers (2D) or 6 numbers (3D).
pub fn validate_bbox(bbox: &[f64]) -> ValidationResult<()> {
	ensure_valid!(
		matches!(bbox.len(), 4 | 6),
		"a bbox must have 4 or 6 numbers, found {}",
		bbox.len()
	);
	Ok(())
}
