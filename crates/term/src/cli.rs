//! CLI schema for the setcalc binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "setcalc")]
#[command(about = "Build, compose, and evaluate set operations")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Read commands from this file instead of standard input
	#[arg(long, short = 'i', value_name = "PATH")]
	pub input: Option<PathBuf>,

	/// Write session output to this file instead of standard output
	#[arg(long, short = 'o', value_name = "PATH")]
	pub output: Option<PathBuf>,

	/// Configuration file (defaults to the user config directory)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Write logs to this file instead of standard error
	#[arg(long, value_name = "PATH")]
	pub log_file: Option<PathBuf>,

	/// Raise log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,

	/// Do not print the operation list before each prompt
	#[arg(long)]
	pub no_listing: bool,
}

impl Cli {
	/// Log filter implied by `-v` flags, if any were given.
	pub fn verbosity_filter(&self) -> Option<&'static str> {
		match self.verbose {
			0 => None,
			1 => Some("info"),
			2 => Some("debug"),
			_ => Some("trace"),
		}
	}
}
