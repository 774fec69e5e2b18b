use super::{DEFAULT_MAX_DEPTH, GeometryRegistry, Schema, ValidationContext};
use crate::{
	ensure_valid,
	error::{ConfigurationError, ResultPathExt, ValidationError, ValidationResult},
	geo::{FeatureId, GeoFeature},
	geojson,
	validators::validate_bbox,
};
use geoschema_core::json::{JsonValue, parse_json_str};
use std::sync::Arc;

/// `Feature`: an optional geometry, validated through the registry, with opaque properties.
///
/// The text form is compact GeoJSON and the binary form its UTF-8 bytes.
#[derive(Clone, Debug)]
pub struct FeatureSchema {
	registry: Option<Arc<GeometryRegistry>>,
	max_depth: usize,
}

impl FeatureSchema {
	/// Fails when `max_depth` is 0.
	pub fn new(max_depth: usize) -> Result<Self, ConfigurationError> {
		if max_depth < 1 {
			return Err(ConfigurationError::MaxDepth(max_depth));
		}
		Ok(FeatureSchema {
			registry: None,
			max_depth,
		})
	}

	#[must_use]
	pub fn with_registry(mut self, registry: Arc<GeometryRegistry>) -> Self {
		self.registry = Some(registry);
		self
	}

	#[must_use]
	pub fn registry(&self) -> &GeometryRegistry {
		match &self.registry {
			Some(registry) => registry,
			None => GeometryRegistry::global(),
		}
	}

	#[must_use]
	pub fn max_depth(&self) -> usize {
		self.max_depth
	}
}

impl Default for FeatureSchema {
	fn default() -> Self {
		FeatureSchema {
			registry: None,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl Schema for FeatureSchema {
	type Value = GeoFeature;

	fn type_name(&self) -> &'static str {
		"Feature"
	}

	fn validate(&self, feature: &GeoFeature) -> ValidationResult<()> {
		if let Some(FeatureId::Number(id)) = &feature.id {
			ensure_valid!(id.is_finite(), "a numeric id must be finite, found {id}");
		}
		if let Some(bbox) = &feature.bbox {
			validate_bbox(bbox).at_key("bbox")?;
		}
		if let Some(geometry) = &feature.geometry {
			ValidationContext::new(self.registry(), self.max_depth)
				.validate_member(geometry)
				.at_key("geometry")?;
		}
		Ok(())
	}

	fn json_decode(&self, json: &JsonValue) -> ValidationResult<GeoFeature> {
		let feature = geojson::decode_feature(json, self.max_depth)?;
		self.validate(&feature)?;
		Ok(feature)
	}

	fn json_encode(&self, feature: &GeoFeature) -> ValidationResult<JsonValue> {
		self.validate(feature)?;
		Ok(geojson::encode_feature(feature))
	}

	fn str_decode(&self, text: &str) -> ValidationResult<GeoFeature> {
		self.json_decode(&parse_json_str(text)?)
	}

	fn str_encode(&self, feature: &GeoFeature) -> ValidationResult<String> {
		Ok(self.json_encode(feature)?.stringify())
	}

	fn bin_decode(&self, data: &[u8]) -> ValidationResult<GeoFeature> {
		self.str_decode(utf8(data)?)
	}

	fn bin_encode(&self, feature: &GeoFeature) -> ValidationResult<Vec<u8>> {
		Ok(self.str_encode(feature)?.into_bytes())
	}
}

/// Binary forms of features are UTF-8 GeoJSON text.
pub(crate) fn utf8(data: &[u8]) -> ValidationResult<&str> {
	std::str::from_utf8(data).map_err(|e| ValidationError::new(format!("invalid UTF-8 in GeoJSON data: {e}")))
}
