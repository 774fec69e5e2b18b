use crate::{ensure_valid, error::ValidationResult, geo::*};

/// Writes `value` as WKT. The bbox is dropped.
///
/// 3D geometries get the `Z` marker, collection members each their own. A geometry that mixes
/// 2D and 3D positions, or that holds a non-finite number, cannot be written.
pub fn write_wkt(value: &GeometryValue) -> ValidationResult<String> {
	let mut text = String::new();
	write_geometry(&mut text, &value.geometry)?;
	Ok(text)
}

fn write_geometry(text: &mut String, geometry: &Geometry) -> ValidationResult<()> {
	text.push_str(geometry.geometry_type().wkt_tag());
	if geometry.coordinate_dimension()? == 3 {
		text.push_str(" Z");
	}
	if geometry.is_empty() {
		text.push_str(" EMPTY");
		return Ok(());
	}
	text.push(' ');

	match geometry {
		Geometry::Point(point) => write_point(text, point),
		Geometry::LineString(line) => write_list(text, &line.0, write_position),
		Geometry::Polygon(polygon) => write_polygon(text, polygon),
		Geometry::MultiPoint(points) => write_list(text, &points.0, write_point),
		Geometry::MultiLineString(lines) => write_list(text, &lines.0, |text, line| write_list(text, &line.0, write_position)),
		Geometry::MultiPolygon(polygons) => write_list(text, &polygons.0, write_polygon),
		Geometry::GeometryCollection(members) => {
			write_list(text, members, |text, member| write_geometry(text, &member.geometry))
		}
	}
}

fn write_list<T>(
	text: &mut String,
	items: &[T],
	mut write_item: impl FnMut(&mut String, &T) -> ValidationResult<()>,
) -> ValidationResult<()> {
	text.push('(');
	for (index, item) in items.iter().enumerate() {
		if index > 0 {
			text.push_str(", ");
		}
		write_item(text, item)?;
	}
	text.push(')');
	Ok(())
}

fn write_point(text: &mut String, point: &PointGeometry) -> ValidationResult<()> {
	text.push('(');
	write_position(text, &point.0)?;
	text.push(')');
	Ok(())
}

fn write_polygon(text: &mut String, polygon: &PolygonGeometry) -> ValidationResult<()> {
	write_list(text, &polygon.0, |text, ring| write_list(text, &ring.0, write_position))
}

fn write_position(text: &mut String, position: &Coordinates) -> ValidationResult<()> {
	for (index, value) in position.as_slice().iter().enumerate() {
		ensure_valid!(value.is_finite(), "WKT cannot represent the number {value}");
		if index > 0 {
			text.push(' ');
		}
		text.push_str(&value.to_string());
	}
	Ok(())
}
