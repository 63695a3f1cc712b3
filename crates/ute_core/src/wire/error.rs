use thiserror::Error;

use crate::wire::FieldType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, UteError>;

/// Errors produced while loading schemas, compiling them, and running the codec.
#[derive(Debug, Error)]
pub enum UteError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Schema descriptor named a type outside the closed type set.
	#[error("unknown type: {name}")]
	UnknownType {
		/// Type name as written in the document.
		name: String,
	},
	/// Schema document could not be parsed or declares no fields.
	#[error("malformed schema document: {reason}")]
	MalformedDocument {
		/// Parser or validation message.
		reason: String,
	},
	/// Requested schema version is not declared by the document.
	#[error("schema version {version} not found")]
	VersionNotFound {
		/// Requested version number.
		version: u32,
	},
	/// Two sibling fields share one name.
	#[error("duplicate field name: {name:?}")]
	DuplicateField {
		/// Repeated field name.
		name: String,
	},
	/// Schema nesting exceeded the compiler limit.
	#[error("schema nesting exceeds max depth {max_depth}")]
	SchemaTooDeep {
		/// Depth ceiling.
		max_depth: usize,
	},
	/// Value or wire tag did not match the field type.
	#[error("type mismatch on field {field:?}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Field being encoded or decoded.
		field: String,
		/// Field type declared by the schema.
		expected: FieldType,
		/// Value kind or wire category actually seen.
		got: String,
	},
	/// Record did not carry a value for a required field.
	#[error("missing value for field {field:?}")]
	MissingValue {
		/// Field name looked up in the record.
		field: String,
	},
	/// Non-empty list against a list field declared without `elem`.
	#[error("list field {field:?} has no element schema")]
	MissingElemSchema {
		/// List field name.
		field: String,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Varint ran past ten bytes or overflowed 64 bits.
	#[error("invalid varint at offset {at}")]
	InvalidVarint {
		/// Offset of the first varint byte.
		at: usize,
	},
	/// Declared list length exceeded the configured limit.
	#[error("list too large: count={count}, max={max}")]
	ListTooLarge {
		/// Declared element count.
		count: u64,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Strict decoding found bytes after the last field.
	#[error("trailing bytes after record: leftover={leftover}")]
	TrailingBytes {
		/// Unconsumed bytes.
		leftover: usize,
	},
}
