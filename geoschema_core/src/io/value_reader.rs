use anyhow::{Result, bail};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

/// Sources that can be read and repositioned.
pub trait SeekRead: Seek + Read {}

/// Reads fixed-size values in the byte order `E`.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Total length of the readable data in bytes.
	fn len(&self) -> u64;

	fn position(&mut self) -> u64;

	fn set_position(&mut self, position: u64) -> Result<()>;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	/// Fails unless at least `count` bytes are left.
	fn ensure_remaining(&mut self, count: u64) -> Result<()> {
		let remaining = self.remaining();
		if remaining < count {
			bail!(
				"unexpected end of data at byte {}: need {count} more bytes, {remaining} left",
				self.position()
			);
		}
		Ok(())
	}

	fn read_u8(&mut self) -> Result<u8> {
		self.ensure_remaining(1)?;
		Ok(self.get_reader().read_u8()?)
	}

	fn read_u32(&mut self) -> Result<u32> {
		self.ensure_remaining(4)?;
		Ok(self.get_reader().read_u32::<E>()?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		self.ensure_remaining(8)?;
		Ok(self.get_reader().read_f64::<E>()?)
	}
}
