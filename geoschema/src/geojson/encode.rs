use crate::geo::*;
use geoschema_core::json::{JsonObject, JsonValue};

/// The GeoJSON tree of a geometry. `bbox` is written only when the value carries one.
#[must_use]
pub fn encode_geometry(value: &GeometryValue) -> JsonValue {
	let mut object = JsonObject::new();
	object.set("type", value.type_name());
	match &value.geometry {
		Geometry::Point(g) => object.set("coordinates", g.to_coord_json()),
		Geometry::LineString(g) => object.set("coordinates", g.to_coord_json()),
		Geometry::Polygon(g) => object.set("coordinates", g.to_coord_json()),
		Geometry::MultiPoint(g) => object.set("coordinates", g.to_coord_json()),
		Geometry::MultiLineString(g) => object.set("coordinates", g.to_coord_json()),
		Geometry::MultiPolygon(g) => object.set("coordinates", g.to_coord_json()),
		Geometry::GeometryCollection(members) => {
			object.set("geometries", members.iter().map(encode_geometry).collect::<Vec<_>>());
		}
	}
	object.set_optional("bbox", &value.bbox);
	JsonValue::Object(object)
}

/// The GeoJSON tree of a feature. `geometry` and `properties` are always present, `null` when unset.
#[must_use]
pub fn encode_feature(feature: &GeoFeature) -> JsonValue {
	let mut object = JsonObject::new();
	object.set("type", "Feature");
	if let Some(id) = &feature.id {
		object.set("id", id.to_json());
	}
	object.set(
		"geometry",
		feature.geometry.as_ref().map_or(JsonValue::Null, encode_geometry),
	);
	object.set(
		"properties",
		feature.properties.clone().map_or(JsonValue::Null, JsonValue::Object),
	);
	object.set_optional("bbox", &feature.bbox);
	JsonValue::Object(object)
}

#[must_use]
pub fn encode_feature_collection(collection: &FeatureCollection) -> JsonValue {
	let mut object = JsonObject::new();
	object.set("type", "FeatureCollection");
	object.set("features", collection.features.iter().map(encode_feature).collect::<Vec<_>>());
	object.set_optional("bbox", &collection.bbox);
	JsonValue::Object(object)
}
