//! Unsigned LEB128 varints: 7 payload bits per byte, least-significant group
//! first, high bit set on every byte except the last.

use crate::wire::bytes::Cursor;
use crate::wire::{Result, UteError};

/// Longest valid encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Append the minimal encoding of `n`.
pub fn encode_varint(out: &mut Vec<u8>, mut n: u64) {
	while n >= 0x80 {
		out.push((n as u8) | 0x80);
		n >>= 7;
	}
	out.push(n as u8);
}

/// Number of bytes `encode_varint` writes for `n`.
pub fn varint_len(n: u64) -> usize {
	let bits = 64 - n.leading_zeros() as usize;
	bits.div_ceil(7).max(1)
}

/// Read one varint from the cursor.
///
/// Non-minimal encodings are accepted. Input ending mid-varint is
/// [`UteError::UnexpectedEof`]; an eleventh byte or bits beyond 64 are
/// [`UteError::InvalidVarint`].
pub fn decode_varint(cursor: &mut Cursor<'_>) -> Result<u64> {
	let at = cursor.pos();
	let mut result = 0_u64;

	for idx in 0..MAX_VARINT_LEN {
		let byte = cursor.read_u8()?;
		let group = u64::from(byte & 0x7f);
		if idx == MAX_VARINT_LEN - 1 && group > 1 {
			return Err(UteError::InvalidVarint { at });
		}

		result |= group << (7 * idx);
		if byte & 0x80 == 0 {
			return Ok(result);
		}
	}

	Err(UteError::InvalidVarint { at })
}
