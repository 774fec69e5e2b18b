use crate::{
	bail_invalid,
	error::{ResultPathExt, ValidationError, ValidationResult},
	geo::*,
	schema::{check_depth, check_discriminator},
};
use geoschema_core::json::{JsonObject, JsonValue};

/// Decodes a geometry object. With `expected` set, any other discriminator is rejected
/// before the coordinates are looked at.
pub fn decode_geometry(
	json: &JsonValue,
	expected: Option<GeometryType>,
	max_depth: usize,
) -> ValidationResult<GeometryValue> {
	decode_geometry_at(json, expected, 0, max_depth)
}

fn decode_geometry_at(
	json: &JsonValue,
	expected: Option<GeometryType>,
	depth: usize,
	max_depth: usize,
) -> ValidationResult<GeometryValue> {
	let object = as_object(json)?;
	let geometry_type = read_type(object)?
		.parse::<GeometryType>()
		.at_key("type")?;
	if let Some(expected) = expected {
		check_discriminator(expected, geometry_type)?;
	}

	let geometry = if geometry_type == GeometryType::GeometryCollection {
		check_depth(depth + 1, max_depth).at_key("geometries")?;
		let members = list(member(object, "geometries")?, |member| {
			decode_geometry_at(member, None, depth + 1, max_depth)
		})
		.at_key("geometries")?;
		Geometry::GeometryCollection(members)
	} else {
		decode_coordinates(geometry_type, member(object, "coordinates")?).at_key("coordinates")?
	};

	Ok(GeometryValue {
		geometry,
		bbox: read_bbox(object)?,
	})
}

fn decode_coordinates(geometry_type: GeometryType, json: &JsonValue) -> ValidationResult<Geometry> {
	use GeometryType::*;
	Ok(match geometry_type {
		Point => Geometry::Point(PointGeometry(position(json)?)),
		LineString => Geometry::LineString(LineStringGeometry(list(json, position)?)),
		Polygon => Geometry::Polygon(polygon(json)?),
		MultiPoint => Geometry::MultiPoint(MultiPointGeometry(list(json, |p| position(p).map(PointGeometry))?)),
		MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(list(json, |l| {
			list(l, position).map(LineStringGeometry)
		})?)),
		MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(list(json, polygon)?)),
		GeometryCollection => bail_invalid!("a geometry collection has no coordinates"),
	})
}

fn position(json: &JsonValue) -> ValidationResult<Coordinates> {
	list(json, |value| Ok(value.as_number()?)).map(Coordinates)
}

fn polygon(json: &JsonValue) -> ValidationResult<PolygonGeometry> {
	list(json, |ring| list(ring, position).map(RingGeometry)).map(PolygonGeometry)
}

/// Decodes every element of a JSON array, citing the index of the first failure.
fn list<T>(json: &JsonValue, mut item: impl FnMut(&JsonValue) -> ValidationResult<T>) -> ValidationResult<Vec<T>> {
	json
		.as_array()?
		.iter()
		.enumerate()
		.map(|(index, value)| item(value).at_index(index))
		.collect()
}

/// Decodes a `Feature` object. A `null` or missing geometry or properties member decodes to `None`.
pub fn decode_feature(json: &JsonValue, max_depth: usize) -> ValidationResult<GeoFeature> {
	let object = as_object(json)?;
	expect_type(object, "Feature")?;

	let geometry = match object.get("geometry") {
		None | Some(JsonValue::Null) => None,
		Some(geometry) => Some(decode_geometry(geometry, None, max_depth).at_key("geometry")?),
	};

	let properties = match object.get("properties") {
		None | Some(JsonValue::Null) => None,
		Some(properties) => Some(as_object(properties).at_key("properties")?.clone()),
	};

	let id = match object.get("id") {
		None | Some(JsonValue::Null) => None,
		Some(JsonValue::String(id)) => Some(FeatureId::String(id.clone())),
		Some(JsonValue::Number(id)) => Some(FeatureId::Number(*id)),
		Some(other) => {
			return Err(ValidationError::new(format!(
				"an id must be a string or a number, found {}",
				other.type_with_article()
			))
			.at_key("id"));
		}
	};

	Ok(GeoFeature {
		id,
		geometry,
		properties,
		bbox: read_bbox(object)?,
	})
}

/// Decodes a `FeatureCollection` object; its `features` member is required.
pub fn decode_feature_collection(json: &JsonValue, max_depth: usize) -> ValidationResult<FeatureCollection> {
	let object = as_object(json)?;
	expect_type(object, "FeatureCollection")?;
	let features = list(member(object, "features")?, |feature| decode_feature(feature, max_depth)).at_key("features")?;
	Ok(FeatureCollection {
		features,
		bbox: read_bbox(object)?,
	})
}

fn as_object(json: &JsonValue) -> ValidationResult<&JsonObject> {
	Ok(json.as_object()?)
}

fn member<'a>(object: &'a JsonObject, key: &str) -> ValidationResult<&'a JsonValue> {
	object
		.get(key)
		.ok_or_else(|| ValidationError::new(format!("missing member '{key}'")))
}

fn read_type(object: &JsonObject) -> ValidationResult<&str> {
	match object.get_str("type") {
		Ok(Some(name)) => Ok(name),
		Ok(None) => Err(ValidationError::new("missing member 'type'")),
		Err(e) => Err(ValidationError::from(e).at_key("type")),
	}
}

fn expect_type(object: &JsonObject, expected: &str) -> ValidationResult<()> {
	let found = read_type(object)?;
	if found != expected {
		return Err(ValidationError::new(format!("expected '{expected}', found '{found}'")).at_key("type"));
	}
	Ok(())
}

fn read_bbox(object: &JsonObject) -> ValidationResult<Option<Vec<f64>>> {
	match object.get("bbox") {
		None | Some(JsonValue::Null) => Ok(None),
		Some(bbox) => list(bbox, |value| Ok(value.as_number()?)).map(Some).at_key("bbox"),
	}
}
