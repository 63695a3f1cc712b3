mod bytes;
mod compile;
mod decode;
mod document;
mod encode;
mod error;
mod field;
mod value;
mod varint;

/// Bounded read cursor used by the decoder.
pub use bytes::Cursor;
/// Schema compilation entry points.
pub use compile::{MAX_SCHEMA_DEPTH, compile_field, compile_fields};
/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_prefix, decode_value, decode_with};
/// Schema document model and version resolution.
pub use document::{RawField, SchemaVersion, find_version, load_versions, load_versions_from_path};
/// Encoding entry points.
pub use encode::{encode, encode_into, encode_value};
/// Error and result aliases.
pub use error::{Result, UteError};
/// Compiled field model.
pub use field::{FieldType, ParsedField};
/// Runtime value tree.
pub use value::{Record, Value};
/// LEB128 varint helpers.
pub use varint::{MAX_VARINT_LEN, decode_varint, encode_varint, varint_len};
