use super::{DEFAULT_MAX_DEPTH, GeometryRegistry, GeometrySchema, ValidationContext, check_discriminator};
use crate::{
	error::{ConfigurationError, ResultPathExt, ValidationResult},
	geo::{Geometry, GeometryType, GeometryValue},
};
use std::sync::Arc;

/// `GeometryCollection`: members of any kind, each validated by the schema the registry
/// holds for its discriminator.
///
/// Collections may contain collections. `max_depth` bounds that nesting; a collection
/// directly holding simple geometries has depth 1.
#[derive(Clone, Debug)]
pub struct GeometryCollectionSchema {
	registry: Option<Arc<GeometryRegistry>>,
	max_depth: usize,
}

impl GeometryCollectionSchema {
	/// Fails when `max_depth` is 0.
	pub fn new(max_depth: usize) -> Result<Self, ConfigurationError> {
		if max_depth < 1 {
			return Err(ConfigurationError::MaxDepth(max_depth));
		}
		Ok(GeometryCollectionSchema {
			registry: None,
			max_depth,
		})
	}

	/// Resolves members in `registry` instead of the global one.
	#[must_use]
	pub fn with_registry(mut self, registry: Arc<GeometryRegistry>) -> Self {
		self.registry = Some(registry);
		self
	}
}

impl Default for GeometryCollectionSchema {
	fn default() -> Self {
		GeometryCollectionSchema {
			registry: None,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl GeometrySchema for GeometryCollectionSchema {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::GeometryCollection
	}

	fn validate_geometry(&self, value: &GeometryValue, context: &ValidationContext) -> ValidationResult<()> {
		let members = match &value.geometry {
			Geometry::GeometryCollection(members) => members,
			other => return check_discriminator(self.geometry_type(), other.geometry_type()),
		};
		let nested = context.nested().at_key("geometries")?;
		for (index, member) in members.iter().enumerate() {
			nested.validate_member(member).at_index(index).at_key("geometries")?;
		}
		Ok(())
	}

	fn registry(&self) -> &GeometryRegistry {
		match &self.registry {
			Some(registry) => registry,
			None => GeometryRegistry::global(),
		}
	}

	fn max_depth(&self) -> usize {
		self.max_depth
	}
}
