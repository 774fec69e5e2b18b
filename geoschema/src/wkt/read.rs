use crate::{
	error::ValidationResult,
	geo::*,
	schema::{check_depth, check_discriminator},
};
use anyhow::{Result, bail};
use geoschema_core::byte_iterator::{ByteIterator, parse_keyword, parse_number_as};
use geoschema_derive::context;

/// Parses one WKT geometry. With `expected` set, any other geometry keyword is rejected
/// before the body is read.
pub fn parse_wkt(text: &str, expected: Option<GeometryType>, max_depth: usize) -> ValidationResult<GeometryValue> {
	let mut iter = ByteIterator::from_str(text);
	let geometry_type = parse_geometry_type(&mut iter)?;
	if let Some(expected) = expected {
		check_discriminator(expected, geometry_type)?;
	}
	let geometry = parse_geometry_body(&mut iter, geometry_type, 0, max_depth)?;
	iter.expect_end()?;
	Ok(GeometryValue::new(geometry))
}

fn parse_geometry_type(iter: &mut ByteIterator) -> Result<GeometryType> {
	let keyword = parse_keyword(iter);
	if keyword.is_empty() {
		bail!(iter.format_error("expected a WKT geometry keyword"));
	}
	match GeometryType::from_wkt_tag(&keyword) {
		Some(geometry_type) => Ok(geometry_type),
		None => bail!("unknown WKT geometry type '{keyword}'"),
	}
}

/// Everything after the geometry keyword: optional `Z`, then `EMPTY` or the parenthesized body.
#[context("while parsing {}", geometry_type.wkt_tag())]
fn parse_geometry_body(
	iter: &mut ByteIterator,
	geometry_type: GeometryType,
	depth: usize,
	max_depth: usize,
) -> Result<Geometry> {
	let (has_z, is_empty) = parse_modifiers(iter)?;
	if geometry_type == GeometryType::GeometryCollection {
		check_depth(depth + 1, max_depth)?;
	}
	if is_empty {
		return empty_geometry(geometry_type);
	}

	use GeometryType::*;
	Ok(match geometry_type {
		Point => {
			iter.expect_byte(b'(')?;
			let position = parse_position(iter, has_z)?;
			iter.expect_byte(b')')?;
			Geometry::Point(PointGeometry(position))
		}
		LineString => Geometry::LineString(LineStringGeometry(parse_positions(iter, has_z)?)),
		Polygon => Geometry::Polygon(parse_polygon(iter, has_z)?),
		MultiPoint => Geometry::MultiPoint(MultiPointGeometry(parse_list(iter, |iter| {
			parse_multi_point_member(iter, has_z)
		})?)),
		MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(parse_list(iter, |iter| {
			parse_positions(iter, has_z).map(LineStringGeometry)
		})?)),
		MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(parse_list(iter, |iter| {
			parse_polygon(iter, has_z)
		})?)),
		GeometryCollection => Geometry::GeometryCollection(parse_list(iter, |iter| {
			let member_type = parse_geometry_type(iter)?;
			let member = parse_geometry_body(iter, member_type, depth + 1, max_depth)?;
			Ok(GeometryValue::new(member))
		})?),
	})
}

/// Reads the optional `Z` marker and the optional `EMPTY` keyword.
fn parse_modifiers(iter: &mut ByteIterator) -> Result<(bool, bool)> {
	let mut keyword = parse_keyword(iter);
	let has_z = keyword == "Z";
	if has_z {
		keyword = parse_keyword(iter);
	}
	match keyword.as_str() {
		"" => Ok((has_z, false)),
		"EMPTY" => Ok((has_z, true)),
		"M" | "ZM" => bail!("measured coordinates (M) are not supported"),
		other => bail!(iter.format_error(&format!("unexpected keyword '{other}'"))),
	}
}

fn empty_geometry(geometry_type: GeometryType) -> Result<Geometry> {
	use GeometryType::*;
	Ok(match geometry_type {
		Point => bail!("an empty POINT cannot be represented"),
		LineString => Geometry::LineString(LineStringGeometry(vec![])),
		Polygon => Geometry::Polygon(PolygonGeometry(vec![])),
		MultiPoint => Geometry::MultiPoint(MultiPointGeometry(vec![])),
		MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry(vec![])),
		MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry(vec![])),
		GeometryCollection => Geometry::GeometryCollection(vec![]),
	})
}

/// `( item, item, … )` with at least one item.
fn parse_list<T>(iter: &mut ByteIterator, mut parse_item: impl FnMut(&mut ByteIterator) -> Result<T>) -> Result<Vec<T>> {
	iter.expect_byte(b'(')?;
	let mut items = Vec::new();
	loop {
		items.push(parse_item(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => continue,
			b')' => break,
			c => bail!(iter.format_error(&format!("expected ',' or ')', found '{}'", c as char))),
		}
	}
	Ok(items)
}

fn parse_positions(iter: &mut ByteIterator, has_z: bool) -> Result<Vec<Coordinates>> {
	parse_list(iter, |iter| parse_position(iter, has_z))
}

#[context("while parsing a polygon")]
fn parse_polygon(iter: &mut ByteIterator, has_z: bool) -> Result<PolygonGeometry> {
	parse_list(iter, |iter| parse_positions(iter, has_z).map(RingGeometry)).map(PolygonGeometry)
}

/// Accepts both `(x y)` and the bare `x y` form.
fn parse_multi_point_member(iter: &mut ByteIterator, has_z: bool) -> Result<PointGeometry> {
	if iter.skip_if(b'(') {
		let position = parse_position(iter, has_z)?;
		iter.expect_byte(b')')?;
		Ok(PointGeometry(position))
	} else {
		parse_position(iter, has_z).map(PointGeometry)
	}
}

/// Whitespace-separated numbers: 2 or 3, exactly 3 after a `Z` marker.
#[context("while parsing a position")]
fn parse_position(iter: &mut ByteIterator, has_z: bool) -> Result<Coordinates> {
	let mut values = Vec::with_capacity(3);
	loop {
		iter.skip_whitespace();
		match iter.peek() {
			Some(b'-' | b'+' | b'0'..=b'9') if values.len() < 3 => {
				values.push(parse_number_as::<f64>(iter)?);
				if let Some(byte) = iter.peek()
					&& !(byte.is_ascii_whitespace() || byte == b',' || byte == b')')
				{
					bail!(iter.format_error(&format!("unexpected character '{}'", byte as char)));
				}
			}
			_ => break,
		}
	}
	if values.is_empty() {
		bail!(iter.format_error("expected a number"));
	}
	if has_z && values.len() != 3 {
		bail!(iter.format_error(&format!("expected 3 values after the Z marker, found {}", values.len())));
	}
	if values.len() < 2 {
		bail!(iter.format_error("a position needs at least 2 values"));
	}
	Ok(Coordinates(values))
}
