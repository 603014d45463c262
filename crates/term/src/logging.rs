//! Tracing subscriber setup.
//!
//! Session output owns standard output, so logs go to standard error or a
//! file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides every other filter source.
pub const LOG_ENV: &str = "SETCALC_LOG";

/// Installs the global subscriber.
///
/// `SETCALC_LOG` wins over `filter` when it is set and valid.
pub fn init(filter: &str, file: Option<&Path>) -> anyhow::Result<()> {
	let env_filter = match EnvFilter::try_from_env(LOG_ENV) {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?,
	};
	let builder = tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false);

	let installed = match file {
		Some(path) => {
			let file = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("cannot open log file {}", path.display()))?;
			builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
		}
		None => builder.with_writer(std::io::stderr).try_init(),
	};
	installed.map_err(|err| anyhow!(err))
}
