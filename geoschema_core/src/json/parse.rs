use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result, bail};

/// Maximum nesting of arrays and objects accepted by the parser.
pub const MAX_JSON_DEPTH: usize = 256;

/// Parses a complete JSON document. Anything but whitespace after the value is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_str(json);
	let value = parse_json_iter(&mut iter).context("while parsing JSON")?;
	iter.expect_end().context("while parsing JSON")?;
	Ok(value)
}

/// Parses one JSON value and leaves the iterator directly after it.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_json_value(iter, 0)
}

fn parse_json_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_JSON_DEPTH => {
			bail!(iter.format_error(&format!("JSON nesting exceeds {MAX_JSON_DEPTH} levels")))
		}
		b'[' => parse_array_entries(iter, |iter| parse_json_value(iter, depth + 1)).map(|v| JsonValue::Array(JsonArray(v))),
		b'{' => {
			let mut object = JsonObject::new();
			parse_object_entries(iter, |key, iter| {
				object.0.insert(key, parse_json_value(iter, depth + 1)?);
				Ok(())
			})?;
			Ok(JsonValue::Object(object))
		}
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}
