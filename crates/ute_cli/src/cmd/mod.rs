/// Value tree decode command.
pub mod decode;
/// Value tree encode command.
pub mod encode;
/// Compiled schema printing command.
pub mod schema;
/// Schema version listing command.
pub mod versions;

mod error;
mod json;
mod util;

pub use error::{CliError, Result};
