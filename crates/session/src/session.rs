//! The command loop.
//!
//! One [`Session`] is one running command loop bound to an input: the
//! console for the root session, or a command file for a session started by
//! `read`. Each iteration prints the registry, reads a command, dispatches it,
//! and then re-checks the capacity invariant. Failed commands are reported and
//! the loop continues; in a file session the operator is asked whether to
//! keep reading.

use std::io::Write;
use std::path::{Path, PathBuf};

use setcalc_registry::{Capacity, CapacityError, CommandTable, OperationRegistry};
use tracing::{debug, info, warn};

use crate::console::{Console, Input};
use crate::error::{Result, SessionError};
use crate::stop::StopToken;

mod handlers;

const COMMAND_PROMPT: &str = "Enter command ('help' for the list of available commands): ";

/// Presentation switches for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
	/// Print the registry listing before every prompt.
	pub show_listing: bool,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self { show_listing: true }
	}
}

/// A command file being read by a nested session.
struct Script<'io> {
	path: PathBuf,
	tokens: Input<'io>,
}

/// One command loop.
pub struct Session<'c, 'io> {
	console: &'c mut Console<'io>,
	registry: &'c mut OperationRegistry,
	script: Option<Script<'io>>,
	capacity: Option<Capacity>,
	/// Line of the command token being executed, for error reports.
	command_line: Option<usize>,
	running: bool,
	root_stop: StopToken,
	commands: CommandTable,
	options: SessionOptions,
	depth: usize,
}

impl<'c, 'io> Session<'c, 'io> {
	/// Creates a root session reading commands from the console.
	///
	/// The capacity is negotiated with the operator on the first iteration.
	pub fn new(console: &'c mut Console<'io>, registry: &'c mut OperationRegistry) -> Self {
		Self {
			console,
			registry,
			script: None,
			capacity: None,
			command_line: None,
			running: true,
			root_stop: StopToken::new(),
			commands: CommandTable::builtin(),
			options: SessionOptions::default(),
			depth: 0,
		}
	}

	pub fn with_options(mut self, options: SessionOptions) -> Self {
		self.options = options;
		self
	}

	/// The negotiated capacity, if any.
	pub fn capacity(&self) -> Option<Capacity> {
		self.capacity
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// The token nested sessions use to stop this session's root.
	pub fn stop_token(&self) -> &StopToken {
		&self.root_stop
	}

	/// Path of the command file, for sessions started by `read`.
	pub fn script_path(&self) -> Option<&Path> {
		self.script.as_ref().map(|s| s.path.as_path())
	}

	/// Runs the loop until `exit`, end of input, or a declined file error.
	///
	/// Only console write failures are returned; every other error is
	/// reported to the operator and recovered.
	pub fn run(&mut self) -> Result<()> {
		info!(depth = self.depth, script = ?self.script_path(), "session started");
		while self.should_continue() {
			if let Err(err) = self.step() {
				self.recover(err)?;
			}
		}
		info!(depth = self.depth, "session finished");
		Ok(())
	}

	/// A file session only consults its own flag; the root also honours
	/// stop requests from nested sessions.
	fn should_continue(&self) -> bool {
		if self.script.is_some() {
			self.running
		} else {
			self.running && !self.root_stop.is_stop_requested()
		}
	}

	fn step(&mut self) -> Result<()> {
		self.command_line = None;
		if self.capacity.is_none() {
			self.capacity = Some(self.negotiate_capacity()?);
		}

		if self.options.show_listing {
			self.print_listing()?;
		}
		write!(self.console.output, "{COMMAND_PROMPT}")?;
		self.console.output.flush()?;

		let token = self.input().next_token()?;
		let command = self.commands.resolve(&token);
		let line = self.input().line();
		self.command_line = Some(line);
		debug!(%token, ?command, line, depth = self.depth, "dispatching");
		self.dispatch(command, &token)?;
		self.enforce_capacity()
	}

	/// Rolls back the newest operation when the registry outgrew its capacity.
	///
	/// Builders append unconditionally, so the registry can be one over its
	/// capacity between the handler returning and this check.
	fn enforce_capacity(&mut self) -> Result<()> {
		let Some(capacity) = self.capacity else {
			return Ok(());
		};
		if capacity.admits(self.registry.len()) {
			return Ok(());
		}
		self.registry.pop();
		writeln!(self.console.output, "Number of maximum operations: {capacity}")?;
		Err(CapacityError::Exceeded(capacity.get()).into())
	}

	fn negotiate_capacity(&mut self) -> Result<Capacity> {
		writeln!(
			self.console.output,
			"Enter the maximum number of operations ({}-{}):",
			Capacity::LOWER + 1,
			Capacity::UPPER - 1
		)?;
		self.console.output.flush()?;
		let requested: i64 = self.input().next_number()?;
		Ok(Capacity::new(requested)?)
	}

	fn print_listing(&mut self) -> Result<()> {
		let out = &mut self.console.output;
		writeln!(out)?;
		writeln!(out, "List of available set operations:")?;
		for (index, id) in self.registry.iter().enumerate() {
			writeln!(out, "{index}.\t{}", self.registry.describe(id))?;
		}
		writeln!(out)?;
		Ok(())
	}

	fn recover(&mut self, err: SessionError) -> Result<()> {
		match err {
			SessionError::Output(_) => return Err(err),
			SessionError::EndOfInput => {
				debug!(depth = self.depth, "input exhausted");
				self.running = false;
				return Ok(());
			}
			_ => {}
		}

		// Failures before a command token was read report the offending token.
		let line = match self.command_line.take() {
			Some(line) => line,
			None => self.input().line(),
		};
		warn!(error = %err, line, depth = self.depth, "command failed");
		self.input().skip_line();
		writeln!(self.console.output, "error: {err}")?;

		if self.script.is_some() {
			self.confirm_continue(line)?;
		}
		Ok(())
	}

	/// Asks the operator, never the file, whether to keep reading.
	fn confirm_continue(&mut self, line: usize) -> Result<()> {
		let path = self.script_path().map(|p| p.display().to_string()).unwrap_or_default();
		let out = &mut self.console.output;
		writeln!(out)?;
		writeln!(out, "error in line {line} of {path}")?;
		write!(out, "Do you want to proceed reading the file? (y/n): ")?;
		out.flush()?;

		let proceed = match self.console.input.next_token() {
			Ok(answer) => !answer.starts_with('n'),
			Err(_) => false,
		};
		if !proceed {
			info!(%path, line, "operator stopped reading file");
			self.running = false;
		}
		Ok(())
	}

	/// The stream commands and their arguments are read from.
	fn input(&mut self) -> &mut Input<'io> {
		match &mut self.script {
			Some(script) => &mut script.tokens,
			None => &mut self.console.input,
		}
	}
}

#[cfg(test)]
mod tests;
