//! [`ValueWriterVec`] collects written values in memory.
//!
//! ```rust
//! use geoschema_core::io::{ValueWriter, ValueWriterVec};
//!
//! let mut writer = ValueWriterVec::new_le();
//! writer.write_u8(1).unwrap();
//! writer.write_u32(1).unwrap();
//! assert_eq!(writer.into_vec(), vec![1, 1, 0, 0, 0]);
//! ```

use super::ValueWriter;
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use std::io::{Cursor, Write};
use std::marker::PhantomData;

pub struct ValueWriterVec<E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<Vec<u8>>,
}

impl<E: ByteOrder> ValueWriterVec<E> {
	#[must_use]
	pub fn new() -> ValueWriterVec<E> {
		ValueWriterVec {
			_phantom: PhantomData,
			cursor: Cursor::new(Vec::new()),
		}
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.cursor.into_inner()
	}
}

impl ValueWriterVec<LittleEndian> {
	#[must_use]
	pub fn new_le() -> ValueWriterVec<LittleEndian> {
		ValueWriterVec::new()
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterVec<E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&mut self) -> Result<u64> {
		Ok(self.cursor.position())
	}
}

impl<E: ByteOrder> Default for ValueWriterVec<E> {
	fn default() -> Self {
		Self::new()
	}
}
