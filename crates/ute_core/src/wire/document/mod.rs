use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::wire::{Result, UteError};

/// Field descriptor as written in a schema document, before compilation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawField {
	/// Field name. List element descriptors usually leave it empty.
	#[serde(default)]
	pub name: String,
	/// Type name, resolved by the compiler.
	#[serde(rename = "type")]
	pub type_name: String,
	/// Element descriptor for `list` fields.
	#[serde(default)]
	pub elem: Option<Box<RawField>>,
	/// Child descriptors for `struct` fields.
	#[serde(default)]
	pub fields: Vec<RawField>,
}

/// One numbered field list from a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemaVersion {
	/// Version number.
	pub version: u32,
	/// Top-level descriptors in wire order.
	#[serde(default)]
	pub fields: Vec<RawField>,
}

#[derive(Deserialize)]
struct Document {
	#[serde(default)]
	versions: Vec<SchemaVersion>,
	#[serde(default)]
	fields: Option<Vec<RawField>>,
}

/// Parse a YAML schema document into its versions, in document order.
///
/// A non-empty `versions` list wins; otherwise a bare `fields` list is
/// treated as version 1.
pub fn load_versions(document: &str) -> Result<Vec<SchemaVersion>> {
	let doc: Document = serde_yaml::from_str(document).map_err(|err| UteError::MalformedDocument { reason: err.to_string() })?;

	let versions = if !doc.versions.is_empty() {
		doc.versions
	} else if let Some(fields) = doc.fields {
		log::debug!("schema document has no versions list, using bare fields as version 1");
		vec![SchemaVersion { version: 1, fields }]
	} else {
		return Err(UteError::MalformedDocument {
			reason: "document declares neither `versions` nor `fields`".to_owned(),
		});
	};

	let mut seen = HashSet::new();
	for item in &versions {
		if !seen.insert(item.version) {
			log::warn!("schema version {} declared more than once, first occurrence wins", item.version);
		}
	}

	log::debug!("loaded {} schema version(s)", versions.len());
	Ok(versions)
}

/// Read a schema document from disk and parse its versions.
pub fn load_versions_from_path(path: impl AsRef<Path>) -> Result<Vec<SchemaVersion>> {
	let text = fs::read_to_string(path)?;
	load_versions(&text)
}

/// Return the first version numbered `version`.
pub fn find_version(versions: &[SchemaVersion], version: u32) -> Result<&SchemaVersion> {
	versions
		.iter()
		.find(|item| item.version == version)
		.ok_or(UteError::VersionNotFound { version })
}
