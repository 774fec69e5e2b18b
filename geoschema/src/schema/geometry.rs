use super::{GeometrySchema, ValidationContext, check_discriminator};
use crate::{
	error::{ConfigurationError, ResultPathExt, ValidationResult},
	geo::{Geometry, GeometryTrait, GeometryType, GeometryValue, PolygonOptions},
};

/// Implements [`GeometrySchema`] for a schema whose geometry only needs `verify`.
macro_rules! impl_simple_geometry_schema {
	($($schema:ident, $variant:ident),*) => {$(
		impl $schema {
			#[must_use]
			pub fn new() -> Self {
				$schema
			}
		}

		impl GeometrySchema for $schema {
			fn geometry_type(&self) -> GeometryType {
				GeometryType::$variant
			}

			fn validate_geometry(&self, value: &GeometryValue, _context: &ValidationContext) -> ValidationResult<()> {
				match &value.geometry {
					Geometry::$variant(geometry) => geometry.verify().at_key("coordinates"),
					other => check_discriminator(self.geometry_type(), other.geometry_type()),
				}
			}
		}
	)*};
}

/// `Point`: one valid position.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointSchema;

/// `LineString`: at least 2 valid positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineStringSchema;

/// `MultiPoint`: any number of points.
#[derive(Clone, Copy, Debug, Default)]
pub struct MultiPointSchema;

/// `MultiLineString`: any number of line strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct MultiLineStringSchema;

impl_simple_geometry_schema!(
	PointSchema,
	Point,
	LineStringSchema,
	LineString,
	MultiPointSchema,
	MultiPoint,
	MultiLineStringSchema,
	MultiLineString
);

/// `Polygon`: closed rings, their number bounded by [`PolygonOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PolygonSchema {
	options: PolygonOptions,
}

impl PolygonSchema {
	/// Fails unless `min_rings >= 1` and `max_rings >= min_rings`.
	pub fn new(min_rings: usize, max_rings: Option<usize>) -> Result<Self, ConfigurationError> {
		Ok(Self::with_options(PolygonOptions::new(min_rings, max_rings)?))
	}

	#[must_use]
	pub fn with_options(options: PolygonOptions) -> Self {
		PolygonSchema { options }
	}

	#[must_use]
	pub fn options(&self) -> &PolygonOptions {
		&self.options
	}
}

impl GeometrySchema for PolygonSchema {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::Polygon
	}

	fn validate_geometry(&self, value: &GeometryValue, _context: &ValidationContext) -> ValidationResult<()> {
		match &value.geometry {
			Geometry::Polygon(polygon) => polygon.verify_with(&self.options).at_key("coordinates"),
			other => check_discriminator(self.geometry_type(), other.geometry_type()),
		}
	}
}

/// `MultiPolygon`: every member polygon obeys the same [`PolygonOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MultiPolygonSchema {
	options: PolygonOptions,
}

impl MultiPolygonSchema {
	pub fn new(min_rings: usize, max_rings: Option<usize>) -> Result<Self, ConfigurationError> {
		Ok(Self::with_options(PolygonOptions::new(min_rings, max_rings)?))
	}

	#[must_use]
	pub fn with_options(options: PolygonOptions) -> Self {
		MultiPolygonSchema { options }
	}

	#[must_use]
	pub fn options(&self) -> &PolygonOptions {
		&self.options
	}
}

impl GeometrySchema for MultiPolygonSchema {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::MultiPolygon
	}

	fn validate_geometry(&self, value: &GeometryValue, _context: &ValidationContext) -> ValidationResult<()> {
		match &value.geometry {
			Geometry::MultiPolygon(polygons) => polygons.verify_with(&self.options).at_key("coordinates"),
			other => check_discriminator(self.geometry_type(), other.geometry_type()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		error::ConfigurationError,
		schema::{Schema, check_discriminator},
	};
	use geoschema_core::json::JsonValue;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn value(geometry: Geometry) -> GeometryValue {
		GeometryValue::from(geometry)
	}

	fn point() -> GeometryValue {
		value(Geometry::new_point([100.0, 0.0]))
	}

	fn line_string() -> GeometryValue {
		value(Geometry::new_line_string(vec![[100.0, 0.0], [101.0, 1.0]]))
	}

	fn polygon_with_hole() -> GeometryValue {
		value(Geometry::new_polygon(vec![
			vec![[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
			vec![[100.8, 0.8], [100.8, 0.2], [100.2, 0.2], [100.2, 0.8], [100.8, 0.8]],
		]))
	}

	fn multi_polygon() -> GeometryValue {
		value(Geometry::new_multi_polygon(vec![
			vec![vec![[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 3.0], [102.0, 2.0]]],
			vec![
				vec![[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
				vec![[100.2, 0.2], [100.2, 0.8], [100.8, 0.8], [100.8, 0.2], [100.2, 0.2]],
			],
		]))
	}

	fn assert_str_bin<S: Schema<Value = GeometryValue>>(schema: &S, value: &GeometryValue) {
		assert_eq!(&schema.str_decode(&schema.str_encode(value).unwrap()).unwrap(), value);
		assert_eq!(&schema.bin_decode(&schema.bin_encode(value).unwrap()).unwrap(), value);
		assert_eq!(&schema.json_decode(&schema.json_encode(value).unwrap()).unwrap(), value);
	}

	// ── Point ───────────────────────────────────────────────────────────

	#[test]
	fn point_valid() {
		assert_eq!(PointSchema.validate(&point()), Ok(()));
		assert_eq!(PointSchema.type_name(), "Point");
	}

	#[test]
	fn point_str_bin() {
		assert_str_bin(&PointSchema, &point());
		assert_str_bin(&PointSchema, &value(Geometry::new_point([-122.4, 37.8, 12.5])));
	}

	#[test]
	fn point_str_bin_drops_bbox() {
		let schema = PointSchema::new();
		let json = JsonValue::parse_str(r#"{"type":"Point","coordinates":[100.0,0.0],"bbox":[-101.0,-101.0,101.0,101.0]}"#)
			.unwrap();
		let with_bbox = schema.json_decode(&json).unwrap();
		assert_eq!(with_bbox.bbox, Some(vec![-101.0, -101.0, 101.0, 101.0]));

		assert_eq!(schema.str_decode(&schema.str_encode(&with_bbox).unwrap()).unwrap(), point());
		assert_eq!(schema.bin_decode(&schema.bin_encode(&with_bbox).unwrap()).unwrap(), point());
		assert_eq!(schema.json_encode(&with_bbox).unwrap(), json);
	}

	#[test]
	fn point_wkb_bytes() {
		let mut expected = vec![0x01, 0x01, 0x00, 0x00, 0x00];
		expected.extend_from_slice(&100.0f64.to_le_bytes());
		expected.extend_from_slice(&0.0f64.to_le_bytes());
		assert_eq!(PointSchema.bin_encode(&point()).unwrap(), expected);
	}

	#[test]
	fn point_bin_with_srid() {
		let data = b"\x01\x01\x00\x00 \xe6\x10\x00\x00\x00\x00\x00\x00\x00\x00Y@\x00\x00\x00\x00\x00\x00\x00\x00";
		assert_eq!(PointSchema.bin_decode(data).unwrap(), point());
	}

	#[test]
	fn point_json_decode_invalid() {
		let json = JsonValue::from(vec![("type", JsonValue::from("Zoink")), ("coordinates", JsonValue::from(vec![100.0, 0.0]))]);
		let error = PointSchema.json_decode(&json).unwrap_err();
		assert_eq!(error.to_string(), "/type: unknown geometry type 'Zoink'");
	}

	#[test]
	fn point_str_decode_invalid() {
		assert!(PointSchema.str_decode("POINT(X Y)").is_err());
	}

	#[test]
	fn point_bin_decode_invalid() {
		assert!(PointSchema.bin_decode(b"1234567890").is_err());
	}

	#[rstest]
	#[case([-190.0, 0.0], "/coordinates: longitude -190 is outside [-180, 180]")]
	#[case([100.0, 91.0], "/coordinates: latitude 91 is outside [-90, 90]")]
	fn point_out_of_range(#[case] position: [f64; 2], #[case] message: &str) {
		let error = PointSchema.validate(&value(Geometry::new_point(position))).unwrap_err();
		assert_eq!(error.to_string(), message);
	}

	#[test]
	fn wrong_kind() {
		let error = PointSchema.validate(&line_string()).unwrap_err();
		assert_eq!(error.to_string(), "/type: expected geometry type 'Point', found 'LineString'");
		assert!(PointSchema.str_decode("LINESTRING (100 0, 101 1)").is_err());
		assert!(PointSchema.bin_decode(&LineStringSchema.bin_encode(&line_string()).unwrap()).is_err());
	}

	// ── LineString ──────────────────────────────────────────────────────

	#[test]
	fn line_string_valid() {
		assert_eq!(LineStringSchema.validate(&line_string()), Ok(()));
		assert_str_bin(&LineStringSchema, &line_string());
	}

	#[test]
	fn line_string_too_short() {
		let error = LineStringSchema
			.validate(&value(Geometry::new_line_string(vec![[100.0, 0.0]])))
			.unwrap_err();
		assert_eq!(error.pointer(), "/coordinates");
	}

	#[test]
	fn line_string_mixing_dimensions() {
		let text_error = LineStringSchema.str_decode("LINESTRING (1 2, 3 4 5)").unwrap_err();
		assert_eq!(text_error.to_string(), "/coordinates: positions mix 2D and 3D coordinates");

		let json = JsonValue::parse_str(r#"{"type":"LineString","coordinates":[[1,2],[3,4,5]]}"#).unwrap();
		assert_eq!(LineStringSchema.json_decode(&json).unwrap_err().pointer(), "/coordinates");
	}

	// ── Polygon ─────────────────────────────────────────────────────────

	#[test]
	fn polygon_valid() {
		let schema = PolygonSchema::default();
		let no_holes = value(Geometry::new_polygon(vec![vec![
			[100.0, 0.0],
			[101.0, 0.0],
			[101.0, 1.0],
			[100.0, 1.0],
			[100.0, 0.0],
		]]));
		assert_eq!(schema.validate(&no_holes), Ok(()));
		assert_eq!(schema.validate(&polygon_with_hole()), Ok(()));
		assert_str_bin(&schema, &polygon_with_hole());
	}

	#[test]
	fn polygon_unclosed_ring() {
		let open = value(Geometry::new_polygon(vec![vec![
			[100.0, 0.0],
			[101.0, 0.0],
			[101.0, 1.0],
			[100.0, 1.0],
		]]));
		let error = PolygonSchema::default().validate(&open).unwrap_err();
		assert_eq!(error.pointer(), "/coordinates/0");
		assert!(error.message().contains("closed"), "{error}");
	}

	#[test]
	fn polygon_configuration() {
		assert_eq!(PolygonSchema::new(0, None).unwrap_err(), ConfigurationError::MinRings(0));
		assert_eq!(
			PolygonSchema::new(2, Some(1)).unwrap_err(),
			ConfigurationError::MaxRings { min: 2, max: 1 }
		);
		assert_eq!(MultiPolygonSchema::new(0, Some(3)).unwrap_err(), ConfigurationError::MinRings(0));
		assert_eq!(PolygonSchema::new(1, Some(1)).unwrap().options().max_rings(), Some(1));
	}

	#[test]
	fn polygon_ring_counts() {
		let single = value(Geometry::new_polygon(vec![vec![
			[100.0, 0.0],
			[101.0, 0.0],
			[101.0, 1.0],
			[100.0, 1.0],
			[100.0, 0.0],
		]]));

		let with_holes = PolygonSchema::new(2, None).unwrap();
		let error = with_holes.validate(&single).unwrap_err();
		assert_eq!(error.to_string(), "/coordinates: a polygon must have at least 2 ring(s), found 1");
		assert_eq!(with_holes.validate(&polygon_with_hole()), Ok(()));

		let without_holes = PolygonSchema::new(1, Some(1)).unwrap();
		assert_eq!(without_holes.validate(&single), Ok(()));
		let error = without_holes.validate(&polygon_with_hole()).unwrap_err();
		assert_eq!(error.message(), "a polygon must have at most 1 ring(s), found 2");
		assert!(without_holes.str_decode(&PolygonSchema::default().str_encode(&polygon_with_hole()).unwrap()).is_err());
	}

	// ── multi geometries ────────────────────────────────────────────────

	#[test]
	fn multi_point() {
		let points = value(Geometry::new_multi_point(vec![[100.0, 0.0], [101.0, 1.0]]));
		assert_eq!(MultiPointSchema.validate(&points), Ok(()));
		assert_str_bin(&MultiPointSchema, &points);
		assert_str_bin(&MultiPointSchema, &value(Geometry::new_multi_point(Vec::<[f64; 2]>::new())));
	}

	#[test]
	fn multi_line_string() {
		let lines = value(Geometry::new_multi_line_string(vec![
			vec![[100.0, 0.0], [101.0, 1.0]],
			vec![[102.0, 2.0], [103.0, 3.0]],
		]));
		assert_eq!(MultiLineStringSchema.validate(&lines), Ok(()));
		assert_str_bin(&MultiLineStringSchema, &lines);
	}

	#[test]
	fn multi_polygon_schema() {
		let schema = MultiPolygonSchema::default();
		assert_eq!(schema.validate(&multi_polygon()), Ok(()));
		assert_str_bin(&schema, &multi_polygon());

		let strict = MultiPolygonSchema::new(1, Some(1)).unwrap();
		assert_eq!(strict.validate(&multi_polygon()).unwrap_err().pointer(), "/coordinates/1");
	}

	#[test]
	fn mismatched_variant_is_rejected_directly() {
		assert!(check_discriminator(GeometryType::Point, GeometryType::Polygon).is_err());
		let registry = crate::schema::GeometryRegistry::new();
		let context = ValidationContext::new(&registry, 1);
		assert!(PolygonSchema::default().validate_geometry(&point(), &context).is_err());
	}
}
