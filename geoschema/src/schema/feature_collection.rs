use super::{FeatureSchema, Schema, feature::utf8};
use crate::{
	error::{ResultPathExt, ValidationResult},
	geo::FeatureCollection,
	geojson,
	validators::validate_bbox,
};
use geoschema_core::json::{JsonValue, parse_json_str};

/// `FeatureCollection`: every member is validated as a feature. Failures are cited as
/// `/features/<index>/…`.
#[derive(Clone, Debug, Default)]
pub struct FeatureCollectionSchema {
	feature: FeatureSchema,
}

impl FeatureCollectionSchema {
	#[must_use]
	pub fn new(feature: FeatureSchema) -> Self {
		FeatureCollectionSchema { feature }
	}

	#[must_use]
	pub fn feature_schema(&self) -> &FeatureSchema {
		&self.feature
	}
}

impl Schema for FeatureCollectionSchema {
	type Value = FeatureCollection;

	fn type_name(&self) -> &'static str {
		"FeatureCollection"
	}

	fn validate(&self, collection: &FeatureCollection) -> ValidationResult<()> {
		if let Some(bbox) = &collection.bbox {
			validate_bbox(bbox).at_key("bbox")?;
		}
		for (index, feature) in collection.features.iter().enumerate() {
			self.feature.validate(feature).at_index(index).at_key("features")?;
		}
		Ok(())
	}

	fn json_decode(&self, json: &JsonValue) -> ValidationResult<FeatureCollection> {
		let collection = geojson::decode_feature_collection(json, self.feature.max_depth())?;
		self.validate(&collection)?;
		Ok(collection)
	}

	fn json_encode(&self, collection: &FeatureCollection) -> ValidationResult<JsonValue> {
		self.validate(collection)?;
		Ok(geojson::encode_feature_collection(collection))
	}

	fn str_decode(&self, text: &str) -> ValidationResult<FeatureCollection> {
		self.json_decode(&parse_json_str(text)?)
	}

	fn str_encode(&self, collection: &FeatureCollection) -> ValidationResult<String> {
		Ok(self.json_encode(collection)?.stringify())
	}

	fn bin_decode(&self, data: &[u8]) -> ValidationResult<FeatureCollection> {
		self.str_decode(utf8(data)?)
	}

	fn bin_encode(&self, collection: &FeatureCollection) -> ValidationResult<Vec<u8>> {
		Ok(self.str_encode(collection)?.into_bytes())
	}
}
