use super::{DEFAULT_MAX_DEPTH, GeometryRegistry, ValidationContext};
use crate::{
	error::ValidationResult,
	geo::{GeometryType, GeometryValue},
	geojson, wkb, wkt,
};
use geoschema_core::json::JsonValue;
use std::fmt::Debug;

/// A validated type with three interchangeable representations.
///
/// Decoders validate before they return. Encoders validate their input first, so an invalid
/// value is never serialized.
pub trait Schema: Debug + Send + Sync {
	type Value;

	/// The discriminator this schema accepts, e.g. `"Polygon"` or `"Feature"`.
	fn type_name(&self) -> &'static str;

	fn validate(&self, value: &Self::Value) -> ValidationResult<()>;

	/// Reads the GeoJSON tree form.
	fn json_decode(&self, json: &JsonValue) -> ValidationResult<Self::Value>;
	fn json_encode(&self, value: &Self::Value) -> ValidationResult<JsonValue>;

	fn str_decode(&self, text: &str) -> ValidationResult<Self::Value>;
	fn str_encode(&self, value: &Self::Value) -> ValidationResult<String>;

	fn bin_decode(&self, data: &[u8]) -> ValidationResult<Self::Value>;
	fn bin_encode(&self, value: &Self::Value) -> ValidationResult<Vec<u8>>;
}

/// A schema for one geometry kind.
///
/// Implementors only check the shape of a value whose discriminator already matched.
/// Discriminator, bbox and nesting checks are done by [`ValidationContext::validate`].
pub trait GeometrySchema: Debug + Send + Sync {
	fn geometry_type(&self) -> GeometryType;

	fn validate_geometry(&self, value: &GeometryValue, context: &ValidationContext) -> ValidationResult<()>;

	/// The registry that resolves collection members when validation starts at this schema.
	fn registry(&self) -> &GeometryRegistry {
		GeometryRegistry::global()
	}

	fn max_depth(&self) -> usize {
		DEFAULT_MAX_DEPTH
	}
}

impl<S: GeometrySchema + ?Sized> Schema for S {
	type Value = GeometryValue;

	fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	fn validate(&self, value: &GeometryValue) -> ValidationResult<()> {
		ValidationContext::new(self.registry(), self.max_depth()).validate(self, value)
	}

	fn json_decode(&self, json: &JsonValue) -> ValidationResult<GeometryValue> {
		let value = geojson::decode_geometry(json, Some(self.geometry_type()), self.max_depth())?;
		self.validate(&value)?;
		Ok(value)
	}

	fn json_encode(&self, value: &GeometryValue) -> ValidationResult<JsonValue> {
		self.validate(value)?;
		Ok(geojson::encode_geometry(value))
	}

	fn str_decode(&self, text: &str) -> ValidationResult<GeometryValue> {
		let value = wkt::parse_wkt(text, Some(self.geometry_type()), self.max_depth())?;
		self.validate(&value)?;
		Ok(value)
	}

	fn str_encode(&self, value: &GeometryValue) -> ValidationResult<String> {
		self.validate(value)?;
		wkt::write_wkt(value)
	}

	fn bin_decode(&self, data: &[u8]) -> ValidationResult<GeometryValue> {
		let value = wkb::parse_wkb(data, Some(self.geometry_type()), self.max_depth())?;
		self.validate(&value)?;
		Ok(value)
	}

	fn bin_encode(&self, value: &GeometryValue) -> ValidationResult<Vec<u8>> {
		self.validate(value)?;
		wkb::write_wkb(value)
	}
}
