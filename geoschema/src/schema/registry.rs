use super::{
	GeometryCollectionSchema, GeometrySchema, LineStringSchema, MultiLineStringSchema,
	MultiPointSchema, MultiPolygonSchema, PointSchema, PolygonSchema, ValidationContext,
};
use crate::{bail_invalid, error::ValidationResult, geo::GeometryValue};
use lazy_static::lazy_static;
use log::debug;
use std::{collections::BTreeMap, sync::Arc};

lazy_static! {
	static ref GLOBAL_REGISTRY: GeometryRegistry = GeometryRegistry::with_defaults();
}

/// Maps geometry discriminators to the schemas that validate them.
///
/// Collections and features resolve their members here, so registering a stricter schema
/// (e.g. a [`PolygonSchema`] requiring holes) changes how nested members are checked.
#[derive(Clone, Debug, Default)]
pub struct GeometryRegistry {
	schemas: BTreeMap<String, Arc<dyn GeometrySchema>>,
}

impl GeometryRegistry {
	/// An empty registry.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// One default schema per geometry kind.
	#[must_use]
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register(PointSchema);
		registry.register(LineStringSchema);
		registry.register(PolygonSchema::default());
		registry.register(MultiPointSchema);
		registry.register(MultiLineStringSchema);
		registry.register(MultiPolygonSchema::default());
		registry.register(GeometryCollectionSchema::default());
		registry
	}

	/// The shared registry with the default schemas.
	#[must_use]
	pub fn global() -> &'static GeometryRegistry {
		&GLOBAL_REGISTRY
	}

	/// Adds `schema` under its type name, replacing any previous entry.
	pub fn register(&mut self, schema: impl GeometrySchema + 'static) -> Option<Arc<dyn GeometrySchema>> {
		let name = schema.geometry_type().as_str();
		let previous = self.schemas.insert(name.to_string(), Arc::new(schema));
		if previous.is_some() {
			debug!("replaced schema for '{name}'");
		} else {
			debug!("registered schema for '{name}'");
		}
		previous
	}

	/// The schema for `name`. Unknown names fail with "unknown geometry type".
	pub fn resolve(&self, name: &str) -> ValidationResult<&dyn GeometrySchema> {
		match self.schemas.get(name) {
			Some(schema) => Ok(schema.as_ref()),
			None => bail_invalid!("unknown geometry type '{name}'"),
		}
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.schemas.contains_key(name)
	}

	/// Validates a value of any registered kind, resolving collection members here as well.
	pub fn validate(&self, value: &GeometryValue, max_depth: usize) -> ValidationResult<()> {
		ValidationContext::new(self, max_depth).validate_member(value)
	}
}
