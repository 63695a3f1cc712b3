use crate::wire::bytes::Cursor;
use crate::wire::varint::decode_varint;
use crate::wire::{FieldType, ParsedField, Record, Result, UteError, Value};

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum element count a list may declare.
	pub max_list_elems: usize,
	/// Error when bytes remain after the last top-level field.
	pub reject_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_list_elems: usize::MAX,
			reject_trailing: false,
		}
	}
}

impl DecodeOptions {
	/// Preset for untrusted input: bounded lists, no trailing bytes.
	pub fn strict() -> Self {
		Self {
			max_list_elems: 1 << 20,
			reject_trailing: true,
		}
	}
}

/// Decode a record using default options.
pub fn decode(bytes: &[u8], fields: &[ParsedField]) -> Result<Record> {
	decode_with(bytes, fields, &DecodeOptions::default())
}

/// Decode a record using explicit options.
pub fn decode_with(bytes: &[u8], fields: &[ParsedField], opt: &DecodeOptions) -> Result<Record> {
	let (record, consumed) = decode_prefix(bytes, fields, opt)?;
	let leftover = bytes.len() - consumed;
	if leftover > 0 {
		if opt.reject_trailing {
			return Err(UteError::TrailingBytes { leftover });
		}
		log::debug!("ignoring {leftover} trailing byte(s) after record");
	}
	Ok(record)
}

/// Decode one record from the front of `bytes`, returning it with the number of bytes consumed.
///
/// `reject_trailing` is not applied; the caller owns whatever follows.
pub fn decode_prefix(bytes: &[u8], fields: &[ParsedField], opt: &DecodeOptions) -> Result<(Record, usize)> {
	let mut cursor = Cursor::new(bytes);
	let record = decode_record(&mut cursor, fields, opt)?;
	Ok((record, cursor.pos()))
}

/// Decode one value against one field descriptor.
///
/// A tag whose category differs from the field type fails before any payload
/// byte is read.
pub fn decode_value(cursor: &mut Cursor<'_>, field: &ParsedField, opt: &DecodeOptions) -> Result<Value> {
	let tag = cursor.read_u8()?;
	let category = FieldType::category_of(tag);
	if category != field.field_type.category() {
		return Err(UteError::TypeMismatch {
			field: field.name.to_string(),
			expected: field.field_type,
			got: category_label(category),
		});
	}
	log::trace!("decode {} field {:?} at {}", field.field_type, field.name, cursor.pos() - 1);

	let value = match field.field_type {
		FieldType::Null => Value::Null,
		FieldType::Bool => Value::Bool(tag & FieldType::BOOL_TRUE_BIT != 0),
		FieldType::Int => Value::UInt(decode_varint(cursor)?),
		FieldType::String => {
			let len = decode_varint(cursor)?;
			Value::Bytes(cursor.read_len(len)?.to_vec())
		}
		FieldType::List => Value::List(decode_list(cursor, field, opt)?),
		FieldType::Struct => {
			let _declared = decode_varint(cursor)?;
			Value::Struct(decode_record(cursor, &field.fields, opt)?)
		}
	};
	Ok(value)
}

fn decode_record(cursor: &mut Cursor<'_>, fields: &[ParsedField], opt: &DecodeOptions) -> Result<Record> {
	let mut record = Record::new();
	for field in fields {
		let value = decode_value(cursor, field, opt)?;
		record.insert(field.name.to_string(), value);
	}
	Ok(record)
}

fn decode_list(cursor: &mut Cursor<'_>, field: &ParsedField, opt: &DecodeOptions) -> Result<Vec<Value>> {
	let count = decode_varint(cursor)?;
	if count == 0 {
		return Ok(Vec::new());
	}
	if count > opt.max_list_elems as u64 {
		return Err(UteError::ListTooLarge {
			count,
			max: opt.max_list_elems,
		});
	}

	let elem = field.elem.as_deref().ok_or_else(|| UteError::MissingElemSchema { field: field.name.to_string() })?;

	// every element needs at least its tag byte
	let count = usize::try_from(count).unwrap_or(usize::MAX);
	if count > cursor.remaining() {
		return Err(cursor.eof(count));
	}

	let mut items = Vec::with_capacity(count);
	for _ in 0..count {
		items.push(decode_value(cursor, elem, opt)?);
	}
	Ok(items)
}

fn category_label(category: u8) -> String {
	match FieldType::from_category(category) {
		Some(ty) => ty.name().to_owned(),
		None => format!("category {category}"),
	}
}
