use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{BufRead, BufReader, Read, stdin},
};

/// Reads a whole input file, or standard input for `-`.
pub fn read_input(path: &str) -> Result<String> {
	let mut text = String::new();
	open_input(path)?
		.read_to_string(&mut text)
		.with_context(|| format!("failed to read {path:?}"))?;
	Ok(text)
}

/// Opens an input file, or standard input for `-`, for reading line by line.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
	if path == "-" {
		return Ok(Box::new(stdin().lock()));
	}
	let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
	Ok(Box::new(BufReader::new(file)))
}

/// Decodes hex digits, ignoring surrounding whitespace.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
	hex::decode(text.trim()).context("invalid hex input")
}
