#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "ute", about = "Schema-driven ute binary encoding tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List the versions declared by a schema document.
	Versions(cmd::versions::Args),
	/// Print the compiled field tree of one schema version.
	Schema(cmd::schema::Args),
	/// Encode a JSON value tree into ute bytes.
	Encode(cmd::encode::Args),
	/// Decode ute bytes into a value tree.
	Decode(cmd::decode::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Versions(args) => cmd::versions::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
	}
}
