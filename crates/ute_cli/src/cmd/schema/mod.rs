use std::path::PathBuf;

use ute::wire::{FieldType, ParsedField};

use crate::cmd::Result;
use crate::cmd::util::{emit_json, load_compiled};

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	#[arg(long, default_value_t = 1)]
	pub version: u32,
	#[arg(long)]
	pub json: bool,
}

/// Print the compiled field tree of one schema version.
pub fn run(args: Args) -> Result<()> {
	let Args { schema, version, json } = args;

	let fields = load_compiled(&schema, version)?;

	if json {
		let payload = SchemaJson {
			path: schema.display().to_string(),
			version,
			fields: fields.iter().map(FieldJson::from_field).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", schema.display());
	println!("version: {version}");
	print!("{}", render_fields(&fields));
	Ok(())
}

/// Render a field tree as an indented `name: type` listing.
pub(crate) fn render_fields(fields: &[ParsedField]) -> String {
	let mut out = String::new();
	for field in fields {
		render_field(&mut out, field, 0, None);
	}
	out
}

fn render_field(out: &mut String, field: &ParsedField, indent: usize, label: Option<&str>) {
	let pad = " ".repeat(indent);
	let name = label.unwrap_or(&*field.name);
	out.push_str(&format!("{pad}{name}: {}", field.field_type));

	match field.field_type {
		FieldType::List => match field.elem.as_deref() {
			Some(elem) => {
				out.push('\n');
				render_field(out, elem, indent + 2, Some("elem"));
			}
			None => out.push_str(" (no elem, empty only)\n"),
		},
		FieldType::Struct => {
			out.push_str(&format!(" ({} fields)\n", field.fields.len()));
			for child in &field.fields {
				render_field(out, child, indent + 2, None);
			}
		}
		_ => out.push('\n'),
	}
}

#[derive(serde::Serialize)]
struct SchemaJson {
	path: String,
	version: u32,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	#[serde(rename = "type")]
	field_type: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	elem: Option<Box<FieldJson>>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	fields: Vec<FieldJson>,
}

impl FieldJson {
	fn from_field(field: &ParsedField) -> Self {
		Self {
			name: field.name.to_string(),
			field_type: field.field_type.name(),
			elem: field.elem.as_deref().map(|elem| Box::new(Self::from_field(elem))),
			fields: field.fields.iter().map(Self::from_field).collect(),
		}
	}
}
