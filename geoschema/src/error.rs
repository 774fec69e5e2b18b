//! Error types of the schema layer.
//!
//! [`ValidationError`] is raised whenever a value is invalid or cannot be decoded,
//! [`ConfigurationError`] when a schema is constructed with unusable options.

use thiserror::Error;

/// A value failed validation or could not be decoded.
///
/// The pointer locates the failing member inside composite values, e.g.
/// `/geometries/1/coordinates/0`. It is built from the inside out: the innermost check
/// creates the error and every enclosing level prepends its own key or index.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{}", render(.pointer, .message))]
pub struct ValidationError {
	message: String,
	pointer: Vec<String>,
}

fn render(pointer: &[String], message: &str) -> String {
	if pointer.is_empty() {
		message.to_string()
	} else {
		format!("/{}: {message}", pointer.join("/"))
	}
}

impl ValidationError {
	pub fn new(message: impl Into<String>) -> Self {
		ValidationError {
			message: message.into(),
			pointer: Vec::new(),
		}
	}

	#[must_use]
	pub fn message(&self) -> &str {
		&self.message
	}

	/// The location as a JSON pointer, or `""` for the root.
	#[must_use]
	pub fn pointer(&self) -> String {
		self.pointer.iter().map(|segment| format!("/{segment}")).collect()
	}

	#[must_use]
	pub fn path(&self) -> &[String] {
		&self.pointer
	}

	#[must_use]
	pub fn at_key(mut self, key: &str) -> Self {
		self.pointer.insert(0, key.to_string());
		self
	}

	#[must_use]
	pub fn at_index(mut self, index: usize) -> Self {
		self.pointer.insert(0, index.to_string());
		self
	}
}

/// Parsers report through `anyhow` with context chains. The whole chain becomes the message.
impl From<anyhow::Error> for ValidationError {
	fn from(error: anyhow::Error) -> Self {
		ValidationError::new(format!("{error:#}"))
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Prepends pointer segments to the error of a [`ValidationResult`].
pub trait ResultPathExt<T> {
	fn at_key(self, key: &str) -> ValidationResult<T>;
	fn at_index(self, index: usize) -> ValidationResult<T>;
}

impl<T> ResultPathExt<T> for ValidationResult<T> {
	fn at_key(self, key: &str) -> ValidationResult<T> {
		self.map_err(|e| e.at_key(key))
	}

	fn at_index(self, index: usize) -> ValidationResult<T> {
		self.map_err(|e| e.at_index(index))
	}
}

/// Returns early with a [`ValidationError`] built from a format string.
#[macro_export]
macro_rules! bail_invalid {
	($($arg:tt)*) => {
		return Err($crate::error::ValidationError::new(format!($($arg)*)))
	};
}

/// Returns early with a [`ValidationError`] unless the condition holds.
#[macro_export]
macro_rules! ensure_valid {
	($cond:expr, $($arg:tt)*) => {
		if !$cond {
			$crate::bail_invalid!($($arg)*);
		}
	};
}

/// A schema was constructed with options that can never be satisfied.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
	#[error("min_rings must be at least 1, got {0}")]
	MinRings(usize),

	#[error("max_rings ({max}) must not be less than min_rings ({min})")]
	MaxRings { min: usize, max: usize },

	#[error("max_depth must be at least 1, got {0}")]
	MaxDepth(usize),
}
