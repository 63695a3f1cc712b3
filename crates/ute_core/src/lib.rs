//! Public library API for the ute schema-driven binary format.

/// Schema documents, schema compilation, and the binary codec.
pub mod wire;
