//! [`ValueReaderSlice`] reads values from a borrowed byte slice.
//!
//! ```rust
//! use geoschema_core::io::{ValueReader, ValueReaderSlice};
//!
//! let data = [0x01, 0x00, 0x00, 0x00];
//! assert_eq!(ValueReaderSlice::new_le(&data).read_u32().unwrap(), 1);
//! assert_eq!(ValueReaderSlice::<byteorder::BigEndian>::new(&data).read_u32().unwrap(), 0x0100_0000);
//! ```

use super::{SeekRead, ValueReader};
use anyhow::{Result, bail};
use byteorder::{ByteOrder, LittleEndian};
use std::{io::Cursor, marker::PhantomData};

pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn set_position(&mut self, position: u64) -> Result<()> {
		if position > self.len {
			bail!("set position outside length")
		}
		self.cursor.set_position(position);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_le_values() -> Result<()> {
		let mut data = vec![0x01];
		data.extend_from_slice(&7u32.to_le_bytes());
		data.extend_from_slice(&100.0f64.to_le_bytes());
		let mut reader = ValueReaderSlice::new_le(&data);

		assert_eq!(reader.len(), 13);
		assert_eq!(reader.read_u8()?, 1);
		assert_eq!(reader.read_u32()?, 7);
		assert_eq!(reader.remaining(), 8);
		assert_eq!(reader.read_f64()?, 100.0);
		assert_eq!(reader.remaining(), 0);
		Ok(())
	}

	#[test]
	fn read_be_values() -> Result<()> {
		let mut data = Vec::new();
		data.extend_from_slice(&1001u32.to_be_bytes());
		data.extend_from_slice(&(-0.5f64).to_be_bytes());
		let mut reader = ValueReaderSlice::<byteorder::BigEndian>::new(&data);

		assert_eq!(reader.read_u32()?, 1001);
		assert_eq!(reader.read_f64()?, -0.5);
		Ok(())
	}

	#[test]
	fn truncated_input() {
		let mut reader = ValueReaderSlice::new_le(b"123");
		let err = reader.read_u32().unwrap_err();
		assert_eq!(err.to_string(), "unexpected end of data at byte 0: need 4 more bytes, 3 left");
		assert_eq!(reader.position(), 0);
	}

	#[test]
	fn set_position() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[1, 2, 3]);
		reader.set_position(2)?;
		assert_eq!(reader.read_u8()?, 3);
		reader.set_position(3)?;
		assert!(reader.set_position(4).is_err());
		Ok(())
	}

	#[test]
	fn empty_slice() {
		let mut reader = ValueReaderSlice::new_le(&[]);
		assert!(reader.is_empty());
		assert!(reader.read_u8().is_err());
	}
}
