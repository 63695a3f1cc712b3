use serde_json::{Map, Value as Json};
use ute::wire::{Record, Value};

use crate::cmd::{CliError, Result};

/// Convert a JSON object into a top-level record.
pub(crate) fn json_to_record(input: &Json) -> Result<Record> {
	match json_to_value(input, "$")? {
		Value::Struct(record) => Ok(record),
		_ => Err(CliError::UnsupportedJson {
			path: "$".to_owned(),
			reason: "top-level value must be an object",
		}),
	}
}

fn json_to_value(input: &Json, path: &str) -> Result<Value> {
	Ok(match input {
		Json::Null => Value::Null,
		Json::Bool(flag) => Value::Bool(*flag),
		Json::Number(number) => Value::UInt(number.as_u64().ok_or_else(|| CliError::UnsupportedJson {
			path: path.to_owned(),
			reason: "numbers must be non-negative integers",
		})?),
		Json::String(text) => Value::from(text.as_str()),
		Json::Array(items) => Value::List(
			items
				.iter()
				.enumerate()
				.map(|(idx, item)| json_to_value(item, &format!("{path}[{idx}]")))
				.collect::<Result<_>>()?,
		),
		Json::Object(entries) => Value::Struct(
			entries
				.iter()
				.map(|(key, item)| Ok((key.clone(), json_to_value(item, &format!("{path}.{key}"))?)))
				.collect::<Result<_>>()?,
		),
	})
}

/// Convert a decoded record into a JSON object.
pub(crate) fn record_to_json(record: &Record) -> Json {
	let mut out = Map::new();
	for (name, value) in record {
		out.insert(name.clone(), value_to_json(value));
	}
	Json::Object(out)
}

/// Convert one decoded value; string bytes are rendered lossily as UTF-8.
pub(crate) fn value_to_json(value: &Value) -> Json {
	match value {
		Value::Null => Json::Null,
		Value::Bool(flag) => Json::Bool(*flag),
		Value::UInt(n) => Json::from(*n),
		Value::Bytes(bytes) => Json::String(String::from_utf8_lossy(bytes).into_owned()),
		Value::List(items) => Json::Array(items.iter().map(value_to_json).collect()),
		Value::Struct(record) => record_to_json(record),
	}
}
