use super::input::{decode_hex, read_input};
use anyhow::{Context, Result};
use geoschema::{
	geo::GeometryType,
	schema::{DEFAULT_MAX_DEPTH, FeatureCollectionSchema, FeatureSchema, GeometryRegistry, Schema},
	wkb::parse_wkb,
	wkt::parse_wkt,
};
use geoschema_core::json::{JsonValue, parse_json_str};
use geoschema_derive::context;
use log::{debug, info};

/// The representations a value can be read from or written to.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Format {
	/// GeoJSON text
	Json,
	/// Well-Known Text; features and collections use GeoJSON text
	Wkt,
	/// Well-Known Binary as hex digits; features and collections use hex UTF-8 GeoJSON
	WkbHex,
}

impl Format {
	/// Guesses the format of `input`: an object is GeoJSON, hex digits are WKB.
	fn detect(input: &str) -> Format {
		let input = input.trim();
		if input.starts_with('{') {
			Format::Json
		} else if !input.is_empty() && input.bytes().all(|b| b.is_ascii_hexdigit()) {
			Format::WkbHex
		} else {
			Format::Wkt
		}
	}
}

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file, or "-" for stdin
	#[arg()]
	input_file: String,

	/// input format, detected from the input if omitted
	#[arg(long, value_enum, display_order = 1)]
	from: Option<Format>,

	/// output format
	#[arg(long, value_enum, default_value = "json", display_order = 1)]
	to: Format,

	/// expected type, e.g. "Polygon" or "Feature"; taken from the input if omitted
	#[arg(long = "type", value_name = "TYPE", display_order = 2)]
	type_name: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let input = read_input(&arguments.input_file)?;
	println!("{}", convert(arguments, &input)?);
	Ok(())
}

#[context("failed to convert {:?}", arguments.input_file)]
fn convert(arguments: &Subcommand, input: &str) -> Result<String> {
	let from = arguments.from.unwrap_or_else(|| Format::detect(input));
	let type_name = match &arguments.type_name {
		Some(type_name) => type_name.clone(),
		None => detect_type(input, from)?,
	};
	info!("converting {type_name} from {from:?} to {:?}", arguments.to);

	match type_name.as_str() {
		"Feature" => transcode(&FeatureSchema::default(), input, from, arguments.to),
		"FeatureCollection" => transcode(&FeatureCollectionSchema::default(), input, from, arguments.to),
		name => transcode(GeometryRegistry::global().resolve(name)?, input, from, arguments.to),
	}
}

/// Decodes `input` with `schema` and encodes the validated value again.
fn transcode<S: Schema + ?Sized>(schema: &S, input: &str, from: Format, to: Format) -> Result<String> {
	let value = match from {
		Format::Json => schema.json_decode(&parse_json_str(input)?)?,
		Format::Wkt => schema.str_decode(input.trim())?,
		Format::WkbHex => schema.bin_decode(&decode_hex(input)?)?,
	};
	debug!("decoded a valid {}", schema.type_name());
	Ok(match to {
		Format::Json => schema.json_encode(&value)?.stringify(),
		Format::Wkt => schema.str_encode(&value)?,
		Format::WkbHex => hex::encode(schema.bin_encode(&value)?),
	})
}

/// Reads the discriminator of `input` without validating it.
fn detect_type(input: &str, format: Format) -> Result<String> {
	match format {
		Format::Json => json_type(input),
		Format::Wkt if input.trim_start().starts_with('{') => json_type(input),
		Format::Wkt => Ok(parse_wkt(input, None, DEFAULT_MAX_DEPTH)?.type_name().to_string()),
		Format::WkbHex => {
			let data = decode_hex(input)?;
			if data.first() == Some(&b'{') {
				json_type(&String::from_utf8(data).context("invalid UTF-8 in GeoJSON data")?)
			} else {
				Ok(parse_wkb(&data, None, DEFAULT_MAX_DEPTH)?.type_name().to_string())
			}
		}
	}
}

fn json_type(input: &str) -> Result<String> {
	let json: JsonValue = parse_json_str(input)?;
	let type_name = json.as_object()?.get_str("type")?.context("missing member 'type'")?;
	if type_name != "Feature" && type_name != "FeatureCollection" {
		type_name.parse::<GeometryType>()?;
	}
	Ok(type_name.to_string())
}
