#![allow(missing_docs)]

use ute::wire::{
	DecodeOptions, FieldType, ParsedField, Record, UteError, Value, compile_fields, decode, decode_with, encode, find_version, load_versions,
	load_versions_from_path,
};
use ute_testkit::{fixture_path, read_fixture};

fn record(entries: Vec<(&str, Value)>) -> Record {
	entries.into_iter().map(|(name, value)| (name.to_owned(), value)).collect()
}

fn devices_value() -> Record {
	let device = |id: u64, name: &str| Value::Struct(record(vec![("id", id.into()), ("name", name.into())]));
	record(vec![("devices", Value::List(vec![device(1, "device1"), device(2, "device2")]))])
}

#[test]
fn complex_fixture_round_trips_devices() {
	let versions = load_versions_from_path(fixture_path("complex.yaml")).expect("fixture loads");
	let v1 = find_version(&versions, 1).expect("bare fields become version 1");
	let fields = compile_fields(&v1.fields).expect("schema compiles");

	let bytes = encode(&devices_value(), &fields).expect("encodes");
	assert_eq!(
		bytes,
		[
			0x80, 0x02, 0xa0, 0x02, 0x40, 0x01, 0x60, 0x07, b'd', b'e', b'v', b'i', b'c', b'e', b'1', 0xa0, 0x02, 0x40, 0x02, 0x60, 0x07, b'd', b'e', b'v', b'i', b'c',
			b'e', b'2',
		]
	);

	let decoded = decode_with(&bytes, &fields, &DecodeOptions::strict()).expect("decodes strictly");
	assert_eq!(decoded, devices_value());
}

#[test]
fn versions_fixture_resolves_each_version() {
	let versions = load_versions(&read_fixture("versions.yaml")).expect("fixture loads");
	assert_eq!(versions.iter().map(|item| item.version).collect::<Vec<_>>(), [1, 2]);

	let v1 = find_version(&versions, 1).expect("v1").compile().expect("v1 compiles");
	let v2 = find_version(&versions, 2).expect("v2").compile().expect("v2 compiles");
	assert_eq!(v1.len(), 2);
	assert_eq!(v2.len(), 6);
	assert_eq!(v2[3], ParsedField::list("tags", Some(ParsedField::new("", FieldType::String))));

	let err = find_version(&versions, 3).expect_err("v3 missing");
	assert!(matches!(err, UteError::VersionNotFound { version: 3 }));
}

#[test]
fn older_reader_rejects_newer_layout_at_first_difference() {
	let versions = load_versions(&read_fixture("versions.yaml")).expect("fixture loads");
	let v1 = find_version(&versions, 1).expect("v1").compile().expect("v1 compiles");
	let v2 = find_version(&versions, 2).expect("v2").compile().expect("v2 compiles");

	let value = record(vec![
		("id", 42_u64.into()),
		("name", "sensor-a".into()),
		("online", true.into()),
		("tags", Value::List(vec!["edge".into()])),
		("location", Value::Struct(record(vec![("site", "north".into()), ("rack", 7_u64.into())]))),
		("retired", Value::Null),
	]);
	let bytes = encode(&value, &v2).expect("v2 encodes");

	let prefix = decode(&bytes, &v1).expect("v1 reads the shared prefix");
	assert_eq!(prefix["id"], Value::UInt(42));
	let err = decode_with(&bytes, &v1, &DecodeOptions::strict()).expect_err("strict v1 sees v2 tail");
	assert!(matches!(err, UteError::TrailingBytes { .. }));

	let short = encode(&record(vec![("id", 1_u64.into()), ("name", "x".into())]), &v1).expect("v1 encodes");
	let err = decode(&short, &v2).expect_err("v2 needs more fields");
	assert!(matches!(err, UteError::UnexpectedEof { .. }));
}

#[test]
fn unknown_type_fixture_fails_to_compile() {
	let versions = load_versions(&read_fixture("bad_type.yaml")).expect("document itself is valid");
	let err = versions[0].compile().expect_err("float is not a ute type");
	assert!(matches!(err, UteError::UnknownType { name } if name == "float"));
}

#[test]
fn compiled_schema_is_shared_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<ParsedField>();
	assert_send_sync::<Value>();

	let versions = load_versions(&read_fixture("complex.yaml")).expect("fixture loads");
	let fields = versions[0].compile().expect("compiles");
	let expected = encode(&devices_value(), &fields).expect("encodes");

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| {
				scope.spawn(|| {
					let bytes = encode(&devices_value(), &fields).expect("encodes");
					let decoded = decode(&bytes, &fields).expect("decodes");
					(bytes, decoded)
				})
			})
			.collect();
		for handle in handles {
			let (bytes, decoded) = handle.join().expect("worker finishes");
			assert_eq!(bytes, expected);
			assert_eq!(decoded, devices_value());
		}
	});
}
