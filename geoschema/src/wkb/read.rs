use super::{BIG_ENDIAN, EWKB_FLAGS, EWKB_M, EWKB_SRID, EWKB_Z, ISO_Z_OFFSET, LITTLE_ENDIAN};
use crate::{
	error::ValidationResult,
	geo::*,
	schema::{check_depth, check_discriminator},
};
use anyhow::{Result, anyhow, bail};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use geoschema_core::io::{ValueReader, ValueReaderSlice};
use geoschema_derive::context;
use log::debug;

/// Parses one WKB geometry that must span all of `data`.
///
/// With `expected` set, any other geometry type is rejected before the body is read.
pub fn parse_wkb(data: &[u8], expected: Option<GeometryType>, max_depth: usize) -> ValidationResult<GeometryValue> {
	let parser = WkbParser { data, max_depth };
	let header = parser.read_header(0)?;
	if let Some(expected) = expected {
		check_discriminator(expected, header.geometry_type)?;
	}
	let (geometry, end) = parser.read_body(&header, 0)?;
	let trailing = data.len() as u64 - end;
	if trailing > 0 {
		return Err(anyhow!("unexpected trailing bytes: {trailing} after the geometry ending at byte {end}").into());
	}
	Ok(GeometryValue::new(geometry))
}

/// Byte order, type and dimension of one encoded geometry.
#[derive(Debug)]
struct Header {
	big_endian: bool,
	geometry_type: GeometryType,
	has_z: bool,
	/// Offset of the first byte after the header.
	body: u64,
}

struct WkbParser<'a> {
	data: &'a [u8],
	max_depth: usize,
}

impl WkbParser<'_> {
	fn read_header(&self, position: u64) -> Result<Header> {
		let mut reader = ValueReaderSlice::new_le(self.data);
		reader.set_position(position)?;
		match reader.read_u8()? {
			BIG_ENDIAN => self.read_type_code::<BigEndian>(position + 1, true),
			LITTLE_ENDIAN => self.read_type_code::<LittleEndian>(position + 1, false),
			marker => bail!("invalid byte order marker {marker} at byte {position}"),
		}
	}

	fn read_type_code<E: ByteOrder>(&self, position: u64, big_endian: bool) -> Result<Header> {
		let mut reader = ValueReaderSlice::<E>::new(self.data);
		reader.set_position(position)?;
		let raw = reader.read_u32()?;

		if raw & EWKB_M != 0 {
			bail!("measured coordinates (M) are not supported");
		}
		if raw & EWKB_SRID != 0 {
			let srid = reader.read_u32()?;
			debug!("skipping EWKB SRID {srid} at byte {position}");
		}

		let code = raw & !EWKB_FLAGS;
		let iso_z = match code / ISO_Z_OFFSET {
			0 => false,
			1 => true,
			2 | 3 => bail!("measured coordinates (M) are not supported"),
			_ => bail!("unknown WKB geometry type code {code}"),
		};
		let geometry_type =
			GeometryType::from_wkb_code(code % ISO_Z_OFFSET).ok_or_else(|| anyhow!("unknown WKB geometry type code {code}"))?;

		Ok(Header {
			big_endian,
			geometry_type,
			has_z: iso_z || raw & EWKB_Z != 0,
			body: reader.position(),
		})
	}

	/// Reads a nested geometry that must be of `member_type`.
	fn read_member(&self, position: u64, member_type: GeometryType, depth: usize) -> Result<(Geometry, u64)> {
		let header = self.read_header(position)?;
		if header.geometry_type != member_type {
			bail!(
				"expected a member of type {member_type}, found {} at byte {position}",
				header.geometry_type
			);
		}
		self.read_body(&header, depth)
	}

	fn read_body(&self, header: &Header, depth: usize) -> Result<(Geometry, u64)> {
		if header.big_endian {
			self.read_body_as::<BigEndian>(header, depth)
		} else {
			self.read_body_as::<LittleEndian>(header, depth)
		}
	}

	/// Returns the geometry and the offset of the first byte after it.
	#[context("while parsing a WKB {}", header.geometry_type)]
	fn read_body_as<E: ByteOrder>(&self, header: &Header, depth: usize) -> Result<(Geometry, u64)> {
		let mut reader = ValueReaderSlice::<E>::new(self.data);
		reader.set_position(header.body)?;
		let has_z = header.has_z;

		use GeometryType::*;
		let geometry = match header.geometry_type {
			Point => Geometry::Point(PointGeometry(read_position(&mut reader, has_z)?)),
			LineString => Geometry::LineString(LineStringGeometry(read_positions(&mut reader, has_z)?)),
			Polygon => Geometry::Polygon(read_polygon(&mut reader, has_z)?),
			MultiPoint => {
				let members = self.read_members(&mut reader, Point, depth)?;
				Geometry::MultiPoint(MultiPointGeometry(
					members
						.into_iter()
						.map(|member| match member {
							Geometry::Point(point) => Ok(point),
							other => Err(anyhow!("expected a Point, found {}", other.type_name())),
						})
						.collect::<Result<_>>()?,
				))
			}
			MultiLineString => {
				let members = self.read_members(&mut reader, LineString, depth)?;
				Geometry::MultiLineString(MultiLineStringGeometry(
					members
						.into_iter()
						.map(|member| match member {
							Geometry::LineString(line) => Ok(line),
							other => Err(anyhow!("expected a LineString, found {}", other.type_name())),
						})
						.collect::<Result<_>>()?,
				))
			}
			MultiPolygon => {
				let members = self.read_members(&mut reader, Polygon, depth)?;
				Geometry::MultiPolygon(MultiPolygonGeometry(
					members
						.into_iter()
						.map(|member| match member {
							Geometry::Polygon(polygon) => Ok(polygon),
							other => Err(anyhow!("expected a Polygon, found {}", other.type_name())),
						})
						.collect::<Result<_>>()?,
				))
			}
			GeometryCollection => {
				check_depth(depth + 1, self.max_depth)?;
				let count = reader.read_u32()?;
				let mut members = Vec::new();
				for _ in 0..count {
					let header = self.read_header(reader.position())?;
					let (member, end) = self.read_body(&header, depth + 1)?;
					reader.set_position(end)?;
					members.push(GeometryValue::new(member));
				}
				Geometry::GeometryCollection(members)
			}
		};
		Ok((geometry, reader.position()))
	}

	/// Reads a count followed by that many complete geometries of `member_type`.
	fn read_members<'a, E: ByteOrder + 'a>(
		&self,
		reader: &mut ValueReaderSlice<'a, E>,
		member_type: GeometryType,
		depth: usize,
	) -> Result<Vec<Geometry>> {
		let count = reader.read_u32()?;
		let mut members = Vec::new();
		for _ in 0..count {
			let (member, end) = self.read_member(reader.position(), member_type, depth)?;
			reader.set_position(end)?;
			members.push(member);
		}
		Ok(members)
	}
}

fn read_position<'a, E: ByteOrder + 'a>(reader: &mut ValueReaderSlice<'a, E>, has_z: bool) -> Result<Coordinates> {
	let x = reader.read_f64()?;
	let y = reader.read_f64()?;
	Ok(if has_z {
		Coordinates(vec![x, y, reader.read_f64()?])
	} else {
		Coordinates(vec![x, y])
	})
}

// Counts come from untrusted input, so vectors grow with the data actually read.
fn read_positions<'a, E: ByteOrder + 'a>(reader: &mut ValueReaderSlice<'a, E>, has_z: bool) -> Result<Vec<Coordinates>> {
	let count = reader.read_u32()?;
	let mut positions = Vec::new();
	for _ in 0..count {
		positions.push(read_position(reader, has_z)?);
	}
	Ok(positions)
}

fn read_polygon<'a, E: ByteOrder + 'a>(reader: &mut ValueReaderSlice<'a, E>, has_z: bool) -> Result<PolygonGeometry> {
	let count = reader.read_u32()?;
	let mut rings = Vec::new();
	for _ in 0..count {
		rings.push(RingGeometry(read_positions(reader, has_z)?));
	}
	Ok(PolygonGeometry(rings))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::DEFAULT_MAX_DEPTH;
	use pretty_assertions::assert_eq;

	fn parse(data: &[u8]) -> ValidationResult<Geometry> {
		parse_wkb(data, None, DEFAULT_MAX_DEPTH).map(|value| value.geometry)
	}

	fn le_point(code: u32, values: &[f64]) -> Vec<u8> {
		let mut data = vec![LITTLE_ENDIAN];
		data.extend_from_slice(&code.to_le_bytes());
		for value in values {
			data.extend_from_slice(&value.to_le_bytes());
		}
		data
	}

	// ── byte order and dimensions ───────────────────────────────────────

	#[test]
	fn little_endian_point() {
		assert_eq!(parse(&le_point(1, &[100.0, 0.0])).unwrap(), Geometry::new_point([100.0, 0.0]));
	}

	#[test]
	fn big_endian_line_string() {
		let mut data = vec![BIG_ENDIAN];
		data.extend_from_slice(&2u32.to_be_bytes());
		data.extend_from_slice(&2u32.to_be_bytes());
		for value in [100.0f64, 0.0, 101.0, 1.0] {
			data.extend_from_slice(&value.to_be_bytes());
		}
		assert_eq!(
			parse(&data).unwrap(),
			Geometry::new_line_string(vec![[100.0, 0.0], [101.0, 1.0]])
		);
	}

	#[test]
	fn iso_and_ewkb_z() {
		let expected = Geometry::new_point([1.0, 2.0, 3.0]);
		assert_eq!(parse(&le_point(1001, &[1.0, 2.0, 3.0])).unwrap(), expected);
		assert_eq!(parse(&le_point(EWKB_Z | 1, &[1.0, 2.0, 3.0])).unwrap(), expected);
	}

	#[test]
	fn ewkb_srid_is_skipped() {
		let mut data = vec![LITTLE_ENDIAN];
		data.extend_from_slice(&(EWKB_SRID | 1).to_le_bytes());
		data.extend_from_slice(&4326u32.to_le_bytes());
		data.extend_from_slice(&100.0f64.to_le_bytes());
		data.extend_from_slice(&0.0f64.to_le_bytes());
		assert_eq!(parse(&data).unwrap(), Geometry::new_point([100.0, 0.0]));
	}

	#[test]
	fn mixed_byte_order_members() {
		let mut data = vec![BIG_ENDIAN];
		data.extend_from_slice(&4u32.to_be_bytes());
		data.extend_from_slice(&1u32.to_be_bytes());
		data.extend(le_point(1, &[100.0, 0.0]));
		assert_eq!(parse(&data).unwrap(), Geometry::new_multi_point(vec![[100.0, 0.0]]));
	}

	// ── malformed input ─────────────────────────────────────────────────

	#[test]
	fn measured_coordinates() {
		for code in [2001, 3001, EWKB_M | 1] {
			let error = parse(&le_point(code, &[1.0, 2.0, 3.0])).unwrap_err();
			assert_eq!(error.to_string(), "measured coordinates (M) are not supported");
		}
	}

	#[test]
	fn unknown_type_code() {
		assert_eq!(
			parse(&le_point(8, &[])).unwrap_err().to_string(),
			"unknown WKB geometry type code 8"
		);
		assert!(parse(b"1234567890").unwrap_err().to_string().contains("invalid byte order marker 49"));
	}

	#[test]
	fn truncated() {
		let mut data = le_point(1, &[100.0, 0.0]);
		data.pop();
		assert_eq!(
			parse(&data).unwrap_err().to_string(),
			"while parsing a WKB Point: unexpected end of data at byte 13: need 8 more bytes, 7 left"
		);
		assert!(parse(&[]).is_err());
	}

	#[test]
	fn huge_count_without_data() {
		let mut data = vec![LITTLE_ENDIAN];
		data.extend_from_slice(&2u32.to_le_bytes());
		data.extend_from_slice(&u32::MAX.to_le_bytes());
		assert!(parse(&data).is_err());
	}

	#[test]
	fn trailing_bytes() {
		let mut data = le_point(1, &[100.0, 0.0]);
		data.push(0);
		assert_eq!(
			parse(&data).unwrap_err().to_string(),
			"unexpected trailing bytes: 1 after the geometry ending at byte 21"
		);
	}

	#[test]
	fn wrong_member_type() {
		let mut data = vec![LITTLE_ENDIAN];
		data.extend_from_slice(&4u32.to_le_bytes());
		data.extend_from_slice(&1u32.to_le_bytes());
		data.extend(le_point(2, &[]));
		let error = parse(&data).unwrap_err().to_string();
		assert!(error.contains("expected a member of type Point, found LineString at byte 9"), "{error}");
	}

	#[test]
	fn expected_type() {
		let error = parse_wkb(&le_point(1, &[1.0, 2.0]), Some(GeometryType::Polygon), DEFAULT_MAX_DEPTH).unwrap_err();
		assert_eq!(error.pointer(), "/type");
	}

	#[test]
	fn depth_limit() {
		fn collection(member: Option<Vec<u8>>) -> Vec<u8> {
			let mut data = vec![LITTLE_ENDIAN];
			data.extend_from_slice(&7u32.to_le_bytes());
			match member {
				Some(member) => {
					data.extend_from_slice(&1u32.to_le_bytes());
					data.extend(member);
				}
				None => data.extend_from_slice(&0u32.to_le_bytes()),
			}
			data
		}
		let data = collection(Some(collection(Some(collection(None)))));
		assert!(parse_wkb(&data, None, 3).is_ok());
		let error = parse_wkb(&data, None, 2).unwrap_err();
		assert!(error.message().ends_with("geometry nesting exceeds maximum depth of 2"));
	}
}
