use crate::{
	geo::{FeatureCollection, GeoFeature},
	schema::{FeatureCollectionSchema, FeatureSchema, Schema},
};
use anyhow::{Error, Result, anyhow};
use futures::{Stream, StreamExt, future::ready, stream};
use log::trace;
use std::io::{BufRead, Read};

/// Reads and validates a complete `FeatureCollection` document.
pub fn read_geojson(mut reader: impl Read, schema: &FeatureCollectionSchema) -> Result<FeatureCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	Ok(schema.str_decode(&buffer)?)
}

fn process_line(line: std::io::Result<String>, index: usize, schema: &FeatureSchema) -> Result<Option<GeoFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => {
			trace!("decoding feature on line {}", index + 1);
			schema
				.str_decode(&line)
				.map(Some)
				.map_err(|e| anyhow!("line {}: {}", index + 1, e))
		}
		Err(e) => Err(anyhow!("line {}: {}", index + 1, e)),
	}
}

/// Reads newline-delimited GeoJSON: one `Feature` per line, blank lines skipped.
pub fn read_ndgeojson_iter(reader: impl BufRead, schema: FeatureSchema) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(move |(index, line)| process_line(line, index, &schema).transpose())
}

/// Like [`read_ndgeojson_iter`], decoding lines on the tokio runtime, as many at once as
/// there are CPUs. Features are yielded in input order.
pub fn read_ndgeojson_stream(reader: impl BufRead, schema: FeatureSchema) -> impl Stream<Item = Result<GeoFeature>> {
	stream::iter(reader.lines().enumerate())
		.map(move |(index, line)| {
			let schema = schema.clone();
			tokio::spawn(async move { process_line(line, index, &schema).transpose() })
		})
		.buffered(num_cpus::get())
		.filter_map(|f| {
			ready(match f {
				Ok(value) => value,
				Err(e) => Some(Err(Error::from(e))),
			})
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::{Geometry, GeometryValue};
	use std::io::{BufReader, Cursor};

	const POINT_FEATURE: &str = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;

	#[test]
	fn read_geojson_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json), &FeatureCollectionSchema::default())?;
		assert_eq!(collection.len(), 1);
		assert_eq!(
			collection.features[0].geometry,
			Some(GeometryValue::from(Geometry::new_point([0.0, 0.0])))
		);
		Ok(())
	}

	#[test]
	fn read_geojson_invalid() {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,95]}}]}"#;
		let error = read_geojson(Cursor::new(json), &FeatureCollectionSchema::default()).unwrap_err();
		assert_eq!(
			error.to_string(),
			"/features/0/geometry/coordinates: latitude 95 is outside [-90, 90]"
		);
	}

	#[test]
	fn read_ndgeojson_iter_with_empty_lines() {
		let input = format!("{POINT_FEATURE}\n\n  \n{POINT_FEATURE}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input)), FeatureSchema::default()).collect();
		assert_eq!(results.len(), 2);
		for result in results {
			assert!(result.unwrap().geometry.is_some());
		}
	}

	#[test]
	fn read_ndgeojson_iter_reports_line_numbers() {
		let input = format!("{POINT_FEATURE}\n{{\"type\":\"Feature\",\"geometry\":{{\"type\":\"Point\",\"coordinates\":[200,0]}}}}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input)), FeatureSchema::default()).collect();
		assert!(results[0].is_ok());
		assert_eq!(
			results[1].as_ref().unwrap_err().to_string(),
			"line 2: /geometry/coordinates: longitude 200 is outside [-180, 180]"
		);
	}

	#[tokio::test]
	async fn read_ndgeojson_stream_keeps_order() {
		let lines: Vec<String> = (0..20)
			.map(|i| format!(r#"{{"type":"Feature","id":{i},"geometry":null,"properties":null}}"#))
			.collect();
		let mut stream = read_ndgeojson_stream(BufReader::new(Cursor::new(lines.join("\n"))), FeatureSchema::default());
		let mut count = 0;
		while let Some(result) = stream.next().await {
			let feature = result.unwrap();
			assert_eq!(feature.id.unwrap().to_string(), count.to_string());
			count += 1;
		}
		assert_eq!(count, 20);
	}
}
