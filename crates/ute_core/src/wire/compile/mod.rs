use std::collections::HashSet;

use crate::wire::{FieldType, ParsedField, RawField, Result, SchemaVersion, UteError};

/// Deepest nesting the compiler accepts. Bounds codec recursion.
pub const MAX_SCHEMA_DEPTH: usize = 64;

/// Compile one descriptor and everything nested under it.
pub fn compile_field(raw: &RawField) -> Result<ParsedField> {
	compile_impl(raw, 1)
}

/// Compile a top-level field list in order, stopping at the first error.
pub fn compile_fields(raws: &[RawField]) -> Result<Vec<ParsedField>> {
	let fields = compile_siblings(raws, 0)?;
	log::debug!("compiled {} top-level field(s)", fields.len());
	Ok(fields)
}

impl SchemaVersion {
	/// Compile this version's field list.
	pub fn compile(&self) -> Result<Vec<ParsedField>> {
		compile_fields(&self.fields)
	}
}

fn compile_siblings(raws: &[RawField], depth: usize) -> Result<Vec<ParsedField>> {
	let mut names = HashSet::with_capacity(raws.len());
	let mut out = Vec::with_capacity(raws.len());
	for raw in raws {
		if !names.insert(raw.name.as_str()) {
			return Err(UteError::DuplicateField { name: raw.name.clone() });
		}
		out.push(compile_impl(raw, depth + 1)?);
	}
	Ok(out)
}

fn compile_impl(raw: &RawField, depth: usize) -> Result<ParsedField> {
	if depth > MAX_SCHEMA_DEPTH {
		return Err(UteError::SchemaTooDeep { max_depth: MAX_SCHEMA_DEPTH });
	}

	let field_type = FieldType::from_name(&raw.type_name).ok_or_else(|| UteError::UnknownType { name: raw.type_name.clone() })?;
	let mut field = ParsedField::new(raw.name.as_str(), field_type);

	match field_type {
		FieldType::List => {
			if let Some(elem) = raw.elem.as_deref() {
				field.elem = Some(Box::new(compile_impl(elem, depth + 1)?));
			}
		}
		FieldType::Struct => {
			field.fields = compile_siblings(&raw.fields, depth)?;
		}
		_ => {}
	}

	if raw.elem.is_some() && field_type != FieldType::List {
		log::debug!("ignoring elem on {} field {:?}", field_type, raw.name);
	}
	if !raw.fields.is_empty() && field_type != FieldType::Struct {
		log::debug!("ignoring nested fields on {} field {:?}", field_type, raw.name);
	}

	Ok(field)
}
