#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "propmarshal", about = "Reflected property inspection over JSON world files")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve a dotted path and export the property value.
	Get(cmd::get::Args),
	/// Apply a JSON value to a property and report before/after.
	Set(cmd::set::Args),
	/// Export every property of an object.
	Dump(cmd::dump::Args),
	/// List declared properties of an object or nested container.
	Props(cmd::props::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
		.format_timestamp(None)
		.init();
}

fn run(command: Commands) -> propmarshal::prop::Result<()> {
	match command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Set(args) => cmd::set::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Props(args) => cmd::props::run(args),
	}
}
