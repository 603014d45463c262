mod cli;
mod config;
mod logging;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use config::Config;
use setcalc_registry::OperationRegistry;
use setcalc_session::{Console, Session, SessionOptions};
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let config = Config::discover(cli.config.as_deref())?;

	let filter = cli.verbosity_filter().unwrap_or(&config.log.filter);
	let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
	logging::init(filter, log_file)?;

	let input: Box<dyn BufRead> = match &cli.input {
		Some(path) => Box::new(BufReader::new(
			File::open(path).with_context(|| format!("cannot open input {}", path.display()))?,
		)),
		None => Box::new(io::stdin().lock()),
	};
	let output: Box<dyn Write> = match &cli.output {
		Some(path) => Box::new(BufWriter::new(
			File::create(path).with_context(|| format!("cannot create output {}", path.display()))?,
		)),
		None => Box::new(io::stdout()),
	};
	info!(input = ?cli.input, output = ?cli.output, "starting setcalc");

	let options = SessionOptions {
		show_listing: config.session.show_listing && !cli.no_listing,
	};
	let mut console = Console::new(input, output);
	let mut registry = OperationRegistry::with_defaults();
	Session::new(&mut console, &mut registry).with_options(options).run()?;

	info!(operations = registry.len(), "setcalc finished");
	Ok(())
}
