use super::input::{open_input, read_input};
use anyhow::{Context, Result, bail};
use futures::StreamExt;
use geoschema::{
	geo::PolygonOptions,
	geojson::{decode_geometry, read_ndgeojson_stream},
	schema::{
		DEFAULT_MAX_DEPTH, FeatureCollectionSchema, FeatureSchema, GeometryCollectionSchema, GeometryRegistry,
		MultiPolygonSchema, PolygonSchema, Schema,
	},
};
use geoschema_core::json::parse_json_str;
use log::{debug, info};
use std::sync::Arc;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file, or "-" for stdin
	#[arg()]
	input_file: String,

	/// read one feature per line
	#[arg(long, display_order = 1)]
	ndjson: bool,

	/// minimum number of rings in a polygon
	#[arg(long, value_name = "int", default_value_t = 1, display_order = 2)]
	min_rings: usize,

	/// maximum number of rings in a polygon
	#[arg(long, value_name = "int", display_order = 2)]
	max_rings: Option<usize>,

	/// maximum nesting of geometry collections
	#[arg(long, value_name = "int", default_value_t = DEFAULT_MAX_DEPTH, display_order = 2)]
	max_depth: usize,
}

/// A feature schema whose registry carries the polygon limits from the command line.
fn feature_schema(arguments: &Subcommand) -> Result<FeatureSchema> {
	let options = PolygonOptions::new(arguments.min_rings, arguments.max_rings)?;
	let mut registry = GeometryRegistry::with_defaults();
	registry.register(PolygonSchema::with_options(options));
	registry.register(MultiPolygonSchema::with_options(options));
	registry.register(GeometryCollectionSchema::new(arguments.max_depth)?);
	Ok(FeatureSchema::new(arguments.max_depth)?.with_registry(Arc::new(registry)))
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let schema = feature_schema(arguments)?;
	let summary = if arguments.ndjson {
		validate_lines(&arguments.input_file, schema).await?
	} else {
		validate_document(&read_input(&arguments.input_file)?, schema)?
	};
	println!("{summary}");
	Ok(())
}

/// Validates a GeoJSON geometry, feature or feature collection.
fn validate_document(input: &str, schema: FeatureSchema) -> Result<String> {
	let json = parse_json_str(input)?;
	let type_name = json.as_object()?.get_str("type")?.context("missing member 'type'")?;
	debug!("validating a {type_name}");

	match type_name {
		"Feature" => {
			schema.json_decode(&json)?;
			Ok(String::from("valid Feature"))
		}
		"FeatureCollection" => {
			let collection = FeatureCollectionSchema::new(schema).json_decode(&json)?;
			Ok(format!("valid FeatureCollection with {} features", collection.len()))
		}
		_ => {
			let value = decode_geometry(&json, None, schema.max_depth())?;
			schema.registry().validate(&value, schema.max_depth())?;
			Ok(format!("valid {}", value.type_name()))
		}
	}
}

/// Validates newline-delimited features and stops at the first invalid line.
async fn validate_lines(path: &str, schema: FeatureSchema) -> Result<String> {
	let mut stream = Box::pin(read_ndgeojson_stream(open_input(path)?, schema));
	let mut count = 0usize;
	while let Some(feature) = stream.next().await {
		if let Err(error) = feature {
			bail!("invalid feature after {count} valid ones: {error}");
		}
		count += 1;
	}
	info!("validated {count} features from {path:?}");
	Ok(format!("valid: {count} features"))
}
