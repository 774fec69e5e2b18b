use crate::{bail_invalid, error::ValidationError};
use std::{fmt::Display, str::FromStr};

/// The discriminator of a geometry value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryType {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiPoint,
		GeometryType::MultiLineString,
		GeometryType::MultiPolygon,
		GeometryType::GeometryCollection,
	];

	/// The GeoJSON `type` value.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use GeometryType::*;
		match self {
			Point => "Point",
			LineString => "LineString",
			Polygon => "Polygon",
			MultiPoint => "MultiPoint",
			MultiLineString => "MultiLineString",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
		}
	}

	/// The upper-case WKT keyword.
	#[must_use]
	pub fn wkt_tag(&self) -> &'static str {
		use GeometryType::*;
		match self {
			Point => "POINT",
			LineString => "LINESTRING",
			Polygon => "POLYGON",
			MultiPoint => "MULTIPOINT",
			MultiLineString => "MULTILINESTRING",
			MultiPolygon => "MULTIPOLYGON",
			GeometryCollection => "GEOMETRYCOLLECTION",
		}
	}

	/// The 2D WKB type code, `1..=7`.
	#[must_use]
	pub fn wkb_code(&self) -> u32 {
		use GeometryType::*;
		match self {
			Point => 1,
			LineString => 2,
			Polygon => 3,
			MultiPoint => 4,
			MultiLineString => 5,
			MultiPolygon => 6,
			GeometryCollection => 7,
		}
	}

	#[must_use]
	pub fn from_wkb_code(code: u32) -> Option<GeometryType> {
		GeometryType::ALL.into_iter().find(|t| t.wkb_code() == code)
	}

	/// Matches an upper-case WKT keyword.
	#[must_use]
	pub fn from_wkt_tag(tag: &str) -> Option<GeometryType> {
		GeometryType::ALL.into_iter().find(|t| t.wkt_tag() == tag)
	}
}

impl FromStr for GeometryType {
	type Err = ValidationError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match GeometryType::ALL.into_iter().find(|t| t.as_str() == name) {
			Some(geometry_type) => Ok(geometry_type),
			None => bail_invalid!("unknown geometry type '{name}'"),
		}
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(GeometryType::Point, "Point", "POINT", 1)]
	#[case(GeometryType::LineString, "LineString", "LINESTRING", 2)]
	#[case(GeometryType::Polygon, "Polygon", "POLYGON", 3)]
	#[case(GeometryType::MultiPoint, "MultiPoint", "MULTIPOINT", 4)]
	#[case(GeometryType::MultiLineString, "MultiLineString", "MULTILINESTRING", 5)]
	#[case(GeometryType::MultiPolygon, "MultiPolygon", "MULTIPOLYGON", 6)]
	#[case(GeometryType::GeometryCollection, "GeometryCollection", "GEOMETRYCOLLECTION", 7)]
	fn names_and_codes(#[case] geometry_type: GeometryType, #[case] name: &str, #[case] tag: &str, #[case] code: u32) {
		assert_eq!(geometry_type.as_str(), name);
		assert_eq!(geometry_type.to_string(), name);
		assert_eq!(name.parse::<GeometryType>().unwrap(), geometry_type);
		assert_eq!(GeometryType::from_wkt_tag(tag), Some(geometry_type));
		assert_eq!(GeometryType::from_wkb_code(code), Some(geometry_type));
		assert_eq!(geometry_type.wkb_code(), code);
	}

	#[test]
	fn unknown_names() {
		assert_eq!(
			"Zoink".parse::<GeometryType>().unwrap_err().message(),
			"unknown geometry type 'Zoink'"
		);
		assert!("point".parse::<GeometryType>().is_err());
		assert_eq!(GeometryType::from_wkb_code(0), None);
		assert_eq!(GeometryType::from_wkb_code(8), None);
		assert_eq!(GeometryType::from_wkt_tag("CIRCULARSTRING"), None);
	}
}
