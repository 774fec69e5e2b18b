//! A small JSON document model.
//!
//! [`JsonValue`] is the interchange representation of geometry values: decoders read it,
//! encoders produce it, and [`parse_json_str`] / [`JsonValue::stringify`] move it to and from text.

mod parse;
mod stringify;
mod types;

pub use parse::{MAX_JSON_DEPTH, parse_json_iter, parse_json_str};
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
