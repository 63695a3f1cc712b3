use crate::wire::varint::encode_varint;
use crate::wire::{FieldType, ParsedField, Record, Result, UteError, Value};

/// Encode a record against a compiled field list.
pub fn encode(record: &Record, fields: &[ParsedField]) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	encode_into(record, fields, &mut out)?;
	Ok(out)
}

/// Append the encoding of `record` to `out`.
///
/// On error `out` is truncated back to its original length.
pub fn encode_into(record: &Record, fields: &[ParsedField], out: &mut Vec<u8>) -> Result<()> {
	let start = out.len();
	let result = encode_record(record, fields, out);
	if result.is_err() {
		out.truncate(start);
	}
	result
}

/// Encode one value against one field descriptor.
pub fn encode_value(value: &Value, field: &ParsedField, out: &mut Vec<u8>) -> Result<()> {
	log::trace!("encode {} field {:?}", field.field_type, field.name);
	match (field.field_type, value) {
		(FieldType::Null, Value::Null) => out.push(FieldType::Null.tag()),
		(FieldType::Bool, Value::Bool(flag)) => {
			let bit = if *flag { FieldType::BOOL_TRUE_BIT } else { 0 };
			out.push(FieldType::Bool.tag() | bit);
		}
		(FieldType::Int, Value::UInt(n)) => {
			out.push(FieldType::Int.tag());
			encode_varint(out, *n);
		}
		(FieldType::String, Value::Bytes(bytes)) => {
			out.push(FieldType::String.tag());
			encode_varint(out, bytes.len() as u64);
			out.extend_from_slice(bytes);
		}
		(FieldType::List, Value::List(items)) => {
			let elem = match field.elem.as_deref() {
				Some(elem) => Some(elem),
				None if items.is_empty() => None,
				None => return Err(UteError::MissingElemSchema { field: field.name.to_string() }),
			};
			out.push(FieldType::List.tag());
			encode_varint(out, items.len() as u64);
			if let Some(elem) = elem {
				for item in items {
					encode_value(item, elem, out)?;
				}
			}
		}
		(FieldType::Struct, Value::Struct(record)) => {
			out.push(FieldType::Struct.tag());
			encode_varint(out, field.fields.len() as u64);
			encode_record(record, &field.fields, out)?;
		}
		(expected, other) => {
			return Err(UteError::TypeMismatch {
				field: field.name.to_string(),
				expected,
				got: other.kind().to_owned(),
			});
		}
	}
	Ok(())
}

fn encode_record(record: &Record, fields: &[ParsedField], out: &mut Vec<u8>) -> Result<()> {
	for field in fields {
		match record.get(&*field.name) {
			Some(value) => encode_value(value, field, out)?,
			None if field.field_type == FieldType::Null => out.push(FieldType::Null.tag()),
			None => return Err(UteError::MissingValue { field: field.name.to_string() }),
		}
	}
	Ok(())
}
