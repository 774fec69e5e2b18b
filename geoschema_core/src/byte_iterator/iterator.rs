//! A peekable iterator over the bytes of any `std::io::Read` source.
//!
//! `ByteIterator` keeps exactly one byte of look-ahead. When debug mode is enabled it also keeps a
//! small ring buffer of the most recently read bytes, so that parse errors can show the input
//! surrounding the failure.

use anyhow::{Error, Result, anyhow};
use std::io::{Cursor, Read};

const DEBUG_RING_BUFFER_SIZE: usize = 16;
const BUFFER_SIZE: usize = 4096;

/// Peekable byte iterator with positional error reporting.
pub struct ByteIterator<'a> {
	buffer: [u8; BUFFER_SIZE],
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	is_debug_enabled: bool,
	debug_buffer: [u8; DEBUG_RING_BUFFER_SIZE],
}

impl<'a> ByteIterator<'a> {
	/// Creates a new iterator reading from `reader`.
	///
	/// With `debug` enabled, errors produced by [`ByteIterator::format_error`] include a snapshot of
	/// the last bytes read.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			buffer: [0; BUFFER_SIZE],
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			is_debug_enabled: debug,
			debug_buffer: [0; DEBUG_RING_BUFFER_SIZE],
		};
		instance.fill_buffer();
		instance.advance();
		instance
	}

	/// Creates a debug-enabled iterator over a string slice.
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(text: &'a str) -> Self {
		Self::from_reader(Cursor::new(text.as_bytes()), true)
	}

	#[inline]
	fn fill_buffer(&mut self) {
		self.buffer_len = self.source.read(&mut self.buffer).unwrap_or(0);
		self.buffer_pos = 0;
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Builds an error that names the current byte position, plus recent input in debug mode.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let position = self.position.saturating_sub(1);
		if !self.is_debug_enabled {
			return anyhow!("{msg} at position {position}");
		}

		let (start_index, length) = if self.position < DEBUG_RING_BUFFER_SIZE {
			(0, position)
		} else {
			(self.position % DEBUG_RING_BUFFER_SIZE, DEBUG_RING_BUFFER_SIZE - 1)
		};

		let snapshot: Vec<u8> = self
			.debug_buffer
			.iter()
			.cycle()
			.skip(start_index)
			.take(length)
			.copied()
			.collect();

		let mut context = String::from_utf8_lossy(&snapshot).into_owned();
		if self.peeked_byte.is_none() {
			context.push_str("<EOF>");
		}
		anyhow!("{msg} at position {position}: {context}")
	}

	/// Number of bytes consumed so far, plus one for the peeked byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Drops the peeked byte and loads the next one.
	#[inline]
	pub fn advance(&mut self) {
		self.peeked_byte = self.next_byte();
		if self.is_debug_enabled
			&& let Some(byte) = self.peeked_byte
		{
			let index = self.position % DEBUG_RING_BUFFER_SIZE;
			self.debug_buffer[index] = byte;
		}
		self.position += 1;
	}

	/// Returns the peeked byte and advances.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Like [`ByteIterator::consume`], but running out of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peeked_byte {
			self.advance();
			Ok(current_byte)
		} else {
			Err(self.format_error("unexpected end"))
		}
	}

	/// Like [`ByteIterator::peek`], but running out of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips ASCII whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Skips whitespace and consumes `byte` if it comes next. Returns whether it did.
	pub fn skip_if(&mut self, byte: u8) -> bool {
		self.skip_whitespace();
		if self.peeked_byte == Some(byte) {
			self.advance();
			true
		} else {
			false
		}
	}

	/// Skips whitespace and fails unless the next byte is `byte`, which is consumed.
	pub fn expect_byte(&mut self, byte: u8) -> Result<()> {
		if self.skip_if(byte) {
			Ok(())
		} else {
			Err(self.format_error(&format!("expected '{}'", byte as char)))
		}
	}

	/// Fails unless only whitespace remains.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		match self.peeked_byte {
			None => Ok(()),
			Some(byte) => Err(self.format_error(&format!("unexpected trailing character '{}'", byte as char))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn peek_and_consume() {
		let mut iter = ByteIterator::from_reader(Cursor::new(vec![b'1', b'2', b'3']), false);

		assert_eq!(iter.peek(), Some(b'1'));
		assert_eq!(iter.consume(), Some(b'1'));
		assert_eq!(iter.peek(), Some(b'2'));
		assert_eq!(iter.consume(), Some(b'2'));
		assert_eq!(iter.consume(), Some(b'3'));
		assert_eq!(iter.peek(), None);
		assert_eq!(iter.consume(), None);
	}

	#[test]
	fn expect_next_and_peeked_byte() {
		let mut iter = ByteIterator::from_str("AB");

		assert_eq!(iter.expect_peeked_byte().unwrap(), b'A');
		assert_eq!(iter.expect_next_byte().unwrap(), b'A');
		assert_eq!(iter.expect_next_byte().unwrap(), b'B');
		assert!(iter.expect_next_byte().is_err());
		assert!(iter.expect_peeked_byte().is_err());
	}

	#[test]
	fn skip_whitespace() {
		let mut iter = ByteIterator::from_str(" \t\nAB");
		iter.skip_whitespace();
		assert_eq!(iter.consume(), Some(b'A'));
		assert_eq!(iter.consume(), Some(b'B'));
	}

	#[test]
	fn skip_if_and_expect_byte() {
		let mut iter = ByteIterator::from_str("  ( 1 )");
		assert!(!iter.skip_if(b')'));
		assert!(iter.skip_if(b'('));
		assert!(iter.expect_byte(b')').is_err());
		assert_eq!(iter.consume(), Some(b'1'));
		iter.expect_byte(b')').unwrap();
		iter.expect_end().unwrap();
	}

	#[test]
	fn expect_end_rejects_trailing_input() {
		let mut iter = ByteIterator::from_str("  x");
		let err = iter.expect_end().unwrap_err().to_string();
		assert!(err.starts_with("unexpected trailing character 'x' at position 2"), "{err}");
	}

	#[test]
	fn format_error_with_snapshot() {
		let mut iter = ByteIterator::from_str("POINT(X Y)");
		for _ in 0..6 {
			iter.consume();
		}
		let error = iter.format_error("expected a number").to_string();
		assert_eq!(error, "expected a number at position 6: POINT(");
	}

	#[test]
	fn format_error_without_debug() {
		let mut iter = ByteIterator::from_reader(Cursor::new("abc"), false);
		iter.consume();
		assert_eq!(iter.format_error("oops").to_string(), "oops at position 1");
	}

	#[test]
	fn ring_buffer_wraps() {
		let input = vec![b'a'; DEBUG_RING_BUFFER_SIZE + 5];
		let mut iter = ByteIterator::from_reader(Cursor::new(input), true);
		for _ in 0..DEBUG_RING_BUFFER_SIZE + 5 {
			iter.consume();
		}
		let error = iter.format_error("end").to_string();
		assert!(error.ends_with(&format!("{}<EOF>", "a".repeat(DEBUG_RING_BUFFER_SIZE - 1))), "{error}");
	}
}
