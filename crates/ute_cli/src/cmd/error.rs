use thiserror::Error;
use ute::wire::UteError;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Schema or codec failure.
	#[error(transparent)]
	Ute(#[from] UteError),
	/// Reading input or writing output failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input or output JSON failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// JSON input cannot be expressed as a ute value.
	#[error("unsupported json value at {path}: {reason}")]
	UnsupportedJson {
		/// Location inside the input document.
		path: String,
		/// What was wrong with it.
		reason: &'static str,
	},
	/// Hex input text was malformed.
	#[error("invalid hex input: {reason}")]
	InvalidHex {
		/// What was wrong with it.
		reason: String,
	},
}
