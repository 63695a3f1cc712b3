use std::collections::BTreeMap;

/// Named values of one struct or one top-level record.
///
/// Wire order comes from the schema, so the map order carries no meaning.
pub type Record = BTreeMap<String, Value>;

/// Runtime value exchanged with encode and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Unsigned integer scalar.
	UInt(u64),
	/// String payload. UTF-8 by convention, not enforced by the codec.
	Bytes(Vec<u8>),
	/// Ordered list of values sharing one element schema.
	List(Vec<Value>),
	/// Nested record.
	Struct(Record),
}

impl Value {
	/// Short kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::UInt(_) => "int",
			Value::Bytes(_) => "string",
			Value::List(_) => "list",
			Value::Struct(_) => "struct",
		}
	}

	/// Borrow a string payload when it is valid UTF-8.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
			_ => None,
		}
	}

	/// Integer payload.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Value::UInt(value) => Some(*value),
			_ => None,
		}
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// List items.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) => Some(items),
			_ => None,
		}
	}

	/// Nested record.
	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Value::Struct(record) => Some(record),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::UInt(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::UInt(u64::from(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Bytes(value.as_bytes().to_vec())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Bytes(value.into_bytes())
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::List(items)
	}
}

impl From<Record> for Value {
	fn from(record: Record) -> Self {
		Value::Struct(record)
	}
}
