use super::{GeometryRegistry, GeometrySchema};
use crate::{
	bail_invalid,
	error::{ResultPathExt, ValidationError, ValidationResult},
	geo::{GeometryType, GeometryValue},
	validators::validate_bbox,
};

/// State carried through one recursive validation: the registry that resolves collection
/// members and the current nesting depth.
#[derive(Clone, Copy, Debug)]
pub struct ValidationContext<'a> {
	registry: &'a GeometryRegistry,
	depth: usize,
	max_depth: usize,
}

impl<'a> ValidationContext<'a> {
	#[must_use]
	pub fn new(registry: &'a GeometryRegistry, max_depth: usize) -> Self {
		ValidationContext {
			registry,
			depth: 0,
			max_depth,
		}
	}

	#[must_use]
	pub fn registry(&self) -> &'a GeometryRegistry {
		self.registry
	}

	#[must_use]
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// The context for the members of a collection at the current depth.
	pub fn nested(&self) -> ValidationResult<ValidationContext<'a>> {
		check_depth(self.depth + 1, self.max_depth)?;
		Ok(ValidationContext {
			depth: self.depth + 1,
			..*self
		})
	}

	/// Validates `value` against `schema`: discriminator first, then the bbox, then the shape.
	///
	/// The positions of one geometry must share a dimension. Collection members are checked
	/// one by one when their own schema runs.
	pub fn validate<S: GeometrySchema + ?Sized>(&self, schema: &S, value: &GeometryValue) -> ValidationResult<()> {
		check_discriminator(schema.geometry_type(), value.geometry_type())?;
		if let Some(bbox) = &value.bbox {
			validate_bbox(bbox).at_key("bbox")?;
		}
		schema.validate_geometry(value, self)?;
		if value.geometry_type() != GeometryType::GeometryCollection {
			value.geometry.coordinate_dimension().at_key("coordinates")?;
		}
		Ok(())
	}

	/// Resolves the schema for `value` in the registry and validates against it.
	pub fn validate_member(&self, value: &GeometryValue) -> ValidationResult<()> {
		let schema = self.registry.resolve(value.type_name()).at_key("type")?;
		self.validate(schema, value)
	}
}

/// Fails with a `/type` pointer unless `found` is the `expected` kind.
pub fn check_discriminator(expected: GeometryType, found: GeometryType) -> ValidationResult<()> {
	if expected != found {
		return Err(ValidationError::new(format!("expected geometry type '{expected}', found '{found}'")).at_key("type"));
	}
	Ok(())
}

/// Fails when `depth` nested collection levels exceed `max_depth`.
pub fn check_depth(depth: usize, max_depth: usize) -> ValidationResult<()> {
	if depth > max_depth {
		bail_invalid!("geometry nesting exceeds maximum depth of {max_depth}");
	}
	Ok(())
}
