use std::fs;
use std::path::PathBuf;

use ute::wire::encode;

use crate::cmd::Result;
use crate::cmd::json::json_to_record;
use crate::cmd::util::{hex_encode, load_compiled};

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	#[arg(long)]
	pub input: PathBuf,
	#[arg(long, default_value_t = 1)]
	pub version: u32,
	#[arg(long)]
	pub output: Option<PathBuf>,
}

/// Encode a JSON value tree; raw bytes go to `--output`, hex to stdout otherwise.
pub fn run(args: Args) -> Result<()> {
	let Args {
		schema,
		input,
		version,
		output,
	} = args;

	let fields = load_compiled(&schema, version)?;
	let text = fs::read_to_string(&input)?;
	let record = json_to_record(&serde_json::from_str(&text)?)?;
	let bytes = encode(&record, &fields)?;

	match output {
		Some(path) => {
			fs::write(&path, &bytes)?;
			println!("wrote {} bytes to {}", bytes.len(), path.display());
		}
		None => println!("{}", hex_encode(&bytes)),
	}

	Ok(())
}
