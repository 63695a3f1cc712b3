use std::fs;
use std::path::PathBuf;

use ute::wire::{DecodeOptions, FieldType, ParsedField, Record, Value, decode_with};

use crate::cmd::Result;
use crate::cmd::json::{record_to_json, value_to_json};
use crate::cmd::util::{emit_json, hex_decode, load_compiled};

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	pub input: PathBuf,
	#[arg(long, default_value_t = 1)]
	pub version: u32,
	#[arg(long)]
	pub hex: bool,
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Decode a ute payload and print it in schema order.
pub fn run(args: Args) -> Result<()> {
	let Args {
		schema,
		input,
		version,
		hex,
		strict,
		json,
	} = args;

	let fields = load_compiled(&schema, version)?;
	let bytes = if hex { hex_decode(&fs::read_to_string(&input)?)? } else { fs::read(&input)? };
	let opt = if strict { DecodeOptions::strict() } else { DecodeOptions::default() };
	let record = decode_with(&bytes, &fields, &opt)?;

	if json {
		let payload = DecodeJson {
			path: input.display().to_string(),
			version,
			bytes: bytes.len(),
			value: record_to_json(&record),
		};
		return emit_json(&payload);
	}

	print!("{}", render_record(&record, &fields));
	Ok(())
}

/// Render a decoded record as `name = value` lines following schema order.
pub(crate) fn render_record(record: &Record, fields: &[ParsedField]) -> String {
	let mut out = String::new();
	render_children(&mut out, record, fields, 0);
	out
}

fn render_children(out: &mut String, record: &Record, fields: &[ParsedField], indent: usize) {
	let pad = " ".repeat(indent);
	for field in fields {
		let Some(value) = record.get(&*field.name) else {
			continue;
		};
		out.push_str(&format!("{pad}{} = ", field.name));
		render_value(out, value, field, indent);
	}
}

fn render_value(out: &mut String, value: &Value, field: &ParsedField, indent: usize) {
	let pad = " ".repeat(indent);
	match value {
		Value::List(items) if !items.is_empty() => {
			out.push_str("[\n");
			for item in items {
				out.push_str(&format!("{pad}  "));
				match field.elem.as_deref() {
					Some(elem) => render_value(out, item, elem, indent + 2),
					None => out.push_str(&format!("{}\n", value_to_json(item))),
				}
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Struct(record) if field.field_type == FieldType::Struct => {
			out.push_str("{\n");
			render_children(out, record, &field.fields, indent + 2);
			out.push_str(&format!("{pad}}}\n"));
		}
		other => out.push_str(&format!("{}\n", value_to_json(other))),
	}
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	version: u32,
	bytes: usize,
	value: serde_json::Value,
}

#[cfg(test)]
mod tests {
	use ute::wire::{FieldType, ParsedField, Record, Value};

	use super::render_record;

	#[test]
	fn renders_in_schema_order() {
		let fields = vec![
			ParsedField::new("zeta", FieldType::Int),
			ParsedField::list(
				"devices",
				Some(ParsedField::structure(
					"",
					vec![ParsedField::new("name", FieldType::String), ParsedField::new("id", FieldType::Int)],
				)),
			),
			ParsedField::new("alpha", FieldType::Bool),
		];

		let mut device = Record::new();
		device.insert("id".to_owned(), Value::UInt(1));
		device.insert("name".to_owned(), Value::from("device1"));
		let mut record = Record::new();
		record.insert("alpha".to_owned(), Value::Bool(true));
		record.insert("zeta".to_owned(), Value::UInt(3));
		record.insert("devices".to_owned(), Value::List(vec![Value::Struct(device)]));

		let expected = "\
zeta = 3
devices = [
  {
    name = \"device1\"
    id = 1
  }
]
alpha = true
";
		assert_eq!(render_record(&record, &fields), expected);
	}

	#[test]
	fn empty_list_renders_inline() {
		let fields = vec![ParsedField::list("tags", None)];
		let mut record = Record::new();
		record.insert("tags".to_owned(), Value::List(Vec::new()));
		assert_eq!(render_record(&record, &fields), "tags = []\n");
	}
}
