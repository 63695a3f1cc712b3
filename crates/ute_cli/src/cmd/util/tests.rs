use ute::wire::{FieldType, UteError};
use ute_testkit::fixture_path;

use super::{hex_decode, hex_encode, load_compiled};
use crate::cmd::CliError;

#[test]
fn hex_round_trips() {
	let bytes = [0x00, 0x30, 0xa0, 0xff];
	assert_eq!(hex_encode(&bytes), "0030a0ff");
	assert_eq!(hex_decode("0030a0ff").expect("hex parses"), bytes);
	assert_eq!(hex_decode(" 00 30\nA0 FF\n").expect("spaced hex parses"), bytes);
}

#[test]
fn hex_rejects_bad_input() {
	assert!(matches!(hex_decode("abc"), Err(CliError::InvalidHex { .. })));
	assert!(matches!(hex_decode("zz"), Err(CliError::InvalidHex { .. })));
}

#[test]
fn loads_requested_version() {
	let fields = load_compiled(&fixture_path("versions.yaml"), 2).expect("v2 loads");
	assert_eq!(fields.len(), 6);
	assert_eq!(fields[2].field_type, FieldType::Bool);

	let err = load_compiled(&fixture_path("versions.yaml"), 9).expect_err("v9 is missing");
	assert!(matches!(err, CliError::Ute(UteError::VersionNotFound { version: 9 })));
}
