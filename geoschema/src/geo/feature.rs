use super::GeometryValue;
use geoschema_core::json::{JsonObject, JsonValue};
use std::fmt::Display;

/// The `id` member of a feature.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureId {
	String(String),
	Number(f64),
}

impl FeatureId {
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			FeatureId::String(s) => JsonValue::from(s),
			FeatureId::Number(n) => JsonValue::from(*n),
		}
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FeatureId::String(s) => write!(f, "{s}"),
			FeatureId::Number(n) => write!(f, "{n}"),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<f64> for FeatureId {
	fn from(value: f64) -> Self {
		FeatureId::Number(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		FeatureId::Number(value as f64)
	}
}

/// A geometry with an open property map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<FeatureId>,
	pub geometry: Option<GeometryValue>,
	pub properties: Option<JsonObject>,
	pub bbox: Option<Vec<f64>>,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: GeometryValue) -> Self {
		Self {
			geometry: Some(geometry),
			..Default::default()
		}
	}

	pub fn set_id(&mut self, id: impl Into<FeatureId>) {
		self.id = Some(id.into());
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.properties.get_or_insert_with(JsonObject::new).set(key, value);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::Geometry;

	#[test]
	fn builder() {
		let mut feature = GeoFeature::new(GeometryValue::from(Geometry::new_point([102.0, 0.5])));
		feature.set_id(7u64);
		feature.set_property("prop0", "value0");
		feature.set_property("prop1", 0.0);

		assert_eq!(feature.id, Some(FeatureId::Number(7.0)));
		let properties = feature.properties.unwrap();
		assert_eq!(properties.get_str("prop0").unwrap(), Some("value0"));
		assert_eq!(properties.get("prop1"), Some(&JsonValue::from(0.0)));
	}

	#[test]
	fn ids() {
		assert_eq!(FeatureId::from("a1").to_json(), JsonValue::from("a1"));
		assert_eq!(FeatureId::from(1.5).to_json(), JsonValue::from(1.5));
		assert_eq!(FeatureId::from("a1").to_string(), "a1");
		assert_eq!(FeatureId::from(3u64).to_string(), "3");
	}
}
