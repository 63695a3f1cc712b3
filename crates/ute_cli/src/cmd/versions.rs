use std::path::PathBuf;

use ute::wire::load_versions_from_path;

use crate::cmd::Result;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// List declared versions with their top-level field names.
pub fn run(args: Args) -> Result<()> {
	let Args { schema, json } = args;

	let versions = load_versions_from_path(&schema)?;

	if json {
		let payload = VersionsJson {
			path: schema.display().to_string(),
			versions: versions
				.iter()
				.map(|item| VersionJson {
					version: item.version,
					field_count: item.fields.len(),
					fields: item.fields.iter().map(|field| field.name.clone()).collect(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", schema.display());
	for item in &versions {
		let names: Vec<&str> = item.fields.iter().map(|field| field.name.as_str()).collect();
		println!("version {}: {} field(s) [{}]", item.version, item.fields.len(), names.join(", "));
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct VersionsJson {
	path: String,
	versions: Vec<VersionJson>,
}

#[derive(serde::Serialize)]
struct VersionJson {
	version: u32,
	field_count: usize,
	fields: Vec<String>,
}
