use super::{ISO_Z_OFFSET, LITTLE_ENDIAN};
use crate::{error::ValidationResult, geo::*};
use anyhow::{Context, Result};
use byteorder::LittleEndian;
use geoschema_core::io::{ValueWriter, ValueWriterVec};

type Writer = ValueWriterVec<LittleEndian>;

/// Writes `value` as little-endian ISO WKB. The bbox is dropped.
///
/// 3D geometries use the ISO Z type codes, collection members each their own. A geometry that
/// mixes 2D and 3D positions cannot be written.
pub fn write_wkb(value: &GeometryValue) -> ValidationResult<Vec<u8>> {
	let mut writer = Writer::new_le();
	write_geometry(&mut writer, &value.geometry)?;
	Ok(writer.into_vec())
}

fn write_geometry(writer: &mut Writer, geometry: &Geometry) -> Result<()> {
	let has_z = geometry.coordinate_dimension()? == 3;
	write_header(writer, geometry.geometry_type(), has_z)?;
	match geometry {
		Geometry::Point(point) => write_position(writer, &point.0),
		Geometry::LineString(line) => write_positions(writer, &line.0),
		Geometry::Polygon(polygon) => write_polygon(writer, polygon),
		Geometry::MultiPoint(points) => {
			write_count(writer, points.0.len())?;
			for point in &points.0 {
				write_header(writer, GeometryType::Point, has_z)?;
				write_position(writer, &point.0)?;
			}
			Ok(())
		}
		Geometry::MultiLineString(lines) => {
			write_count(writer, lines.0.len())?;
			for line in &lines.0 {
				write_header(writer, GeometryType::LineString, has_z)?;
				write_positions(writer, &line.0)?;
			}
			Ok(())
		}
		Geometry::MultiPolygon(polygons) => {
			write_count(writer, polygons.0.len())?;
			for polygon in &polygons.0 {
				write_header(writer, GeometryType::Polygon, has_z)?;
				write_polygon(writer, polygon)?;
			}
			Ok(())
		}
		Geometry::GeometryCollection(members) => {
			write_count(writer, members.len())?;
			for member in members {
				write_geometry(writer, &member.geometry)?;
			}
			Ok(())
		}
	}
}

fn write_header(writer: &mut Writer, geometry_type: GeometryType, has_z: bool) -> Result<()> {
	writer.write_u8(LITTLE_ENDIAN)?;
	let offset = if has_z { ISO_Z_OFFSET } else { 0 };
	writer.write_u32(geometry_type.wkb_code() + offset)
}

fn write_count(writer: &mut Writer, count: usize) -> Result<()> {
	let count = u32::try_from(count).context("too many elements for WKB")?;
	writer.write_u32(count)
}

fn write_position(writer: &mut Writer, position: &Coordinates) -> Result<()> {
	for value in position.as_slice() {
		writer.write_f64(*value)?;
	}
	Ok(())
}

fn write_positions(writer: &mut Writer, positions: &[Coordinates]) -> Result<()> {
	write_count(writer, positions.len())?;
	for position in positions {
		write_position(writer, position)?;
	}
	Ok(())
}

fn write_polygon(writer: &mut Writer, polygon: &PolygonGeometry) -> Result<()> {
	write_count(writer, polygon.0.len())?;
	for ring in &polygon.0 {
		write_positions(writer, &ring.0)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{schema::DEFAULT_MAX_DEPTH, wkb::parse_wkb};
	use pretty_assertions::assert_eq;

	fn wkb(geometry: &Geometry) -> Vec<u8> {
		write_wkb(&GeometryValue::from(geometry.clone())).unwrap()
	}

	#[test]
	fn point_bytes() {
		let mut expected = vec![1, 1, 0, 0, 0];
		expected.extend_from_slice(&100.0f64.to_le_bytes());
		expected.extend_from_slice(&0.0f64.to_le_bytes());
		assert_eq!(wkb(&Geometry::new_point([100.0, 0.0])), expected);
	}

	#[test]
	fn point_z_uses_iso_code() {
		let data = wkb(&Geometry::new_point([1.0, 2.0, 3.0]));
		assert_eq!(data[1..5], 1001u32.to_le_bytes());
		assert_eq!(data.len(), 5 + 24);
	}

	#[test]
	fn multi_point_members_have_headers() {
		let data = wkb(&Geometry::new_multi_point(vec![[100.0, 0.0], [101.0, 1.0]]));
		assert_eq!(data.len(), 9 + 2 * 21);
		assert_eq!(data[9..14], [1, 1, 0, 0, 0]);
	}

	#[test]
	fn round_trips() {
		let geometries = [
			Geometry::new_line_string(vec![[100.0, 0.0], [101.0, 1.0]]),
			Geometry::new_polygon(vec![
				vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
				vec![[0.2, 0.2], [0.4, 0.2], [0.4, 0.4], [0.2, 0.2]],
			]),
			Geometry::new_multi_line_string(vec![vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]]),
			Geometry::new_multi_polygon(vec![vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]),
			Geometry::new_geometry_collection(vec![
				GeometryValue::from(Geometry::new_point([100.0, 0.0])),
				GeometryValue::from(Geometry::new_geometry_collection(vec![])),
			]),
		];
		for geometry in geometries {
			let decoded = parse_wkb(&wkb(&geometry), None, DEFAULT_MAX_DEPTH).unwrap();
			assert_eq!(decoded.geometry, geometry);
		}
	}

	#[test]
	fn bbox_is_dropped() {
		let value = GeometryValue::from(Geometry::new_point([1.0, 2.0])).with_bbox(vec![1.0, 2.0, 1.0, 2.0]);
		let decoded = parse_wkb(&write_wkb(&value).unwrap(), None, DEFAULT_MAX_DEPTH).unwrap();
		assert_eq!(decoded, value.without_bbox());
	}

	#[test]
	fn mixed_dimensions() {
		let geometry = Geometry::new_multi_point(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
		assert_eq!(
			write_wkb(&GeometryValue::from(geometry)).unwrap_err().to_string(),
			"positions mix 2D and 3D coordinates"
		);
	}

	#[test]
	fn collection_members_keep_their_dimension() {
		let collection = Geometry::new_geometry_collection(vec![
			GeometryValue::from(Geometry::new_point([1.0, 2.0])),
			GeometryValue::from(Geometry::new_point([3.0, 4.0, 5.0])),
		]);
		let data = wkb(&collection);
		assert_eq!(data[1..5], 7u32.to_le_bytes());
		assert_eq!(data[10..14], 1u32.to_le_bytes());
		assert_eq!(data[31..35], 1001u32.to_le_bytes());
		assert_eq!(parse_wkb(&data, None, DEFAULT_MAX_DEPTH).unwrap().geometry, collection);

		let all_3d = Geometry::new_geometry_collection(vec![GeometryValue::from(Geometry::new_line_string(vec![
			[1.0, 2.0, 3.0],
			[4.0, 5.0, 6.0],
		]))]);
		let data = wkb(&all_3d);
		assert_eq!(data[1..5], 1007u32.to_le_bytes());
		assert_eq!(parse_wkb(&data, None, DEFAULT_MAX_DEPTH).unwrap().geometry, all_3d);
	}
}
