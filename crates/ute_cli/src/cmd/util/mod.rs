use std::path::Path;

use ute::wire::{ParsedField, find_version, load_versions_from_path};

use crate::cmd::{CliError, Result};

/// Load a schema document, select one version, and compile it.
pub(crate) fn load_compiled(path: &Path, version: u32) -> Result<Vec<ParsedField>> {
	let versions = load_versions_from_path(path)?;
	let selected = find_version(&versions, version)?;
	let fields = selected.compile()?;
	log::debug!("using schema version {version} from {} ({} field(s))", path.display(), fields.len());
	Ok(fields)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Render bytes as lowercase hex without separators.
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		out.push_str(&format!("{byte:02x}"));
	}
	out
}

/// Parse hex text; ASCII whitespace between digits is ignored.
pub(crate) fn hex_decode(text: &str) -> Result<Vec<u8>> {
	let digits: Vec<u8> = text.bytes().filter(|byte| !byte.is_ascii_whitespace()).collect();
	if digits.len() % 2 != 0 {
		return Err(CliError::InvalidHex {
			reason: format!("odd number of digits ({})", digits.len()),
		});
	}

	digits
		.chunks_exact(2)
		.map(|pair| {
			let high = hex_digit(pair[0])?;
			let low = hex_digit(pair[1])?;
			Ok((high << 4) | low)
		})
		.collect()
}

fn hex_digit(digit: u8) -> Result<u8> {
	char::from(digit)
		.to_digit(16)
		.map(|value| value as u8)
		.ok_or_else(|| CliError::InvalidHex {
			reason: format!("unexpected character {:?}", char::from(digit)),
		})
}

#[cfg(test)]
mod tests;
