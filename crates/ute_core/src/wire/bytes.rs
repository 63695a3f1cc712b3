use crate::wire::{Result, UteError};

/// Simple bounded cursor over an immutable byte slice.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(self.eof(n));
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let raw = self.read_exact(1)?;
		Ok(raw[0])
	}

	/// Read a length that must fit in the remaining input.
	///
	/// Lengths beyond `usize` are reported as EOF since no slice could satisfy them.
	pub fn read_len(&mut self, len: u64) -> Result<&'a [u8]> {
		let n = usize::try_from(len).map_err(|_| self.eof(usize::MAX))?;
		self.read_exact(n)
	}

	pub(crate) fn eof(&self, need: usize) -> UteError {
		UteError::UnexpectedEof {
			at: self.pos,
			need,
			rem: self.remaining(),
		}
	}
}
