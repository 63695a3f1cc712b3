//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a text fixture, panicking with the path on failure.
pub fn read_fixture(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
}

/// Parse a JSON fixture.
pub fn fixture_json(name: &str) -> serde_json::Value {
	serde_json::from_str(&read_fixture(name)).unwrap_or_else(|err| panic!("fixture {name} is not valid json: {err}"))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Fresh scratch directory under the target dir for tests that write files.
pub fn scratch_dir(label: &str) -> PathBuf {
	let dir = target_dir().join("ute-test-scratch").join(format!("{label}-{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("failed to create {}: {err}", dir.display()));
	dir
}
