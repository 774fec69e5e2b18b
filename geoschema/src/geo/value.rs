use super::{Geometry, GeometryType};

/// A geometry together with its optional bounding box.
///
/// The bbox travels through the GeoJSON codec only. WKT and WKB have no place for it, so
/// decoding those yields values without one.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryValue {
	pub geometry: Geometry,
	pub bbox: Option<Vec<f64>>,
}

impl GeometryValue {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		GeometryValue { geometry, bbox: None }
	}

	#[must_use]
	pub fn with_bbox(mut self, bbox: Vec<f64>) -> Self {
		self.bbox = Some(bbox);
		self
	}

	/// Removes the bbox here and on every collection member.
	#[must_use]
	pub fn without_bbox(self) -> Self {
		let geometry = match self.geometry {
			Geometry::GeometryCollection(members) => {
				Geometry::GeometryCollection(members.into_iter().map(GeometryValue::without_bbox).collect())
			}
			geometry => geometry,
		};
		GeometryValue { geometry, bbox: None }
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		self.geometry.geometry_type()
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry.type_name()
	}
}

impl<T> From<T> for GeometryValue
where
	Geometry: From<T>,
{
	fn from(geometry: T) -> Self {
		GeometryValue::new(Geometry::from(geometry))
	}
}
