use super::*;
use crate::{bail_invalid, error::ValidationResult};
use std::fmt::Debug;

/// The seven geometry kinds. Collections nest complete geometry values.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<GeometryValue>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_geometry_collection(members: Vec<GeometryValue>) -> Self {
		Self::GeometryCollection(members)
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	/// True for multi geometries and collections without members.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Geometry::Point(_) => false,
			Geometry::LineString(g) => g.0.is_empty(),
			Geometry::Polygon(g) => g.0.is_empty(),
			Geometry::MultiPoint(g) => g.0.is_empty(),
			Geometry::MultiLineString(g) => g.0.is_empty(),
			Geometry::MultiPolygon(g) => g.0.is_empty(),
			Geometry::GeometryCollection(members) => members.is_empty(),
		}
	}

	/// Visits every position, descending into collection members.
	pub fn for_each_position(&self, callback: &mut dyn FnMut(&Coordinates)) {
		match self {
			Geometry::Point(g) => g.for_each_position(callback),
			Geometry::LineString(g) => g.for_each_position(callback),
			Geometry::Polygon(g) => g.for_each_position(callback),
			Geometry::MultiPoint(g) => g.for_each_position(callback),
			Geometry::MultiLineString(g) => g.for_each_position(callback),
			Geometry::MultiPolygon(g) => g.for_each_position(callback),
			Geometry::GeometryCollection(members) => {
				for member in members {
					member.geometry.for_each_position(callback);
				}
			}
		}
	}

	/// The number of values per position: 2, or 3 when every position has an elevation.
	///
	/// Geometries without positions count as 2D. Within one geometry all positions must agree.
	/// A collection is 3D when it has members and all of them are 3D; its members may differ,
	/// because every member carries its own dimension marker in WKT and WKB.
	pub fn coordinate_dimension(&self) -> ValidationResult<usize> {
		if let Geometry::GeometryCollection(members) = self {
			let mut all_3d = !members.is_empty();
			for member in members {
				all_3d &= member.geometry.coordinate_dimension()? == 3;
			}
			return Ok(if all_3d { 3 } else { 2 });
		}

		let mut dimensions: Option<usize> = None;
		let mut mixed = false;
		self.for_each_position(&mut |c| match dimensions {
			None => dimensions = Some(c.dimensions()),
			Some(d) if d != c.dimensions() => mixed = true,
			Some(_) => {}
		});
		if mixed {
			bail_invalid!("positions mix 2D and 3D coordinates");
		}
		Ok(dimensions.unwrap_or(2))
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(members) => members,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_into_geometry {
	($($variant:ident, $t:ty),*) => {$(
		impl From<$t> for Geometry {
			fn from(geometry: $t) -> Self {
				Geometry::$variant(geometry)
			}
		}
	)*}
}

impl_into_geometry!(
	Point,
	PointGeometry,
	LineString,
	LineStringGeometry,
	Polygon,
	PolygonGeometry,
	MultiPoint,
	MultiPointGeometry,
	MultiLineString,
	MultiLineStringGeometry,
	MultiPolygon,
	MultiPolygonGeometry
);
