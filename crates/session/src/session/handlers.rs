use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use setcalc_primitives::{Set, Tokens};
use setcalc_registry::{Combinator, Command, OperationId};
use tracing::{debug, info};

use super::{Script, Session};
use crate::error::{Result, SessionError};

impl<'c, 'io> Session<'c, 'io> {
	pub(super) fn dispatch(&mut self, command: Command, token: &str) -> Result<()> {
		match command {
			Command::Read => self.read_file(),
			Command::Resize => self.resize(),
			Command::Eval => self.eval(),
			Command::Union => self.build(Combinator::Union),
			Command::Intersection => self.build(Combinator::Intersection),
			Command::Difference => self.build(Combinator::Difference),
			Command::Product => self.build(Combinator::Product),
			Command::Compose => self.build(Combinator::Compose),
			Command::Del => self.delete(),
			Command::Help => self.help(),
			Command::Exit => self.exit(),
			Command::Invalid => Err(SessionError::UnknownCommand(token.to_owned())),
		}
	}

	/// Reads an index and checks it addresses an existing slot.
	fn read_index(&mut self) -> Result<usize> {
		let raw: i64 = self.input().next_number()?;
		self.registry.resolve(raw)?;
		Ok(raw as usize)
	}

	fn read_operation(&mut self) -> Result<OperationId> {
		let raw: i64 = self.input().next_number()?;
		Ok(self.registry.resolve(raw)?)
	}

	/// Appends a combinator over two existing operations.
	///
	/// Capacity is not checked here; the loop rolls the append back if needed.
	/// An operation with too many inputs is refused before anything is appended.
	fn build(&mut self, combinator: Combinator) -> Result<()> {
		let lhs = self.read_operation()?;
		let rhs = self.read_operation()?;
		let index = self.registry.push_combinator(combinator, lhs, rhs)?;
		debug!(?combinator, index, "operation added");
		Ok(())
	}

	fn eval(&mut self) -> Result<()> {
		let id = self.read_operation()?;
		let arity = self.registry.arity(id);
		let inputs = (0..arity)
			.map(|_| Set::read(self.input()))
			.collect::<std::result::Result<Vec<_>, _>>()?;

		let description = self.registry.describe_with(id, &inputs);
		let result = self.registry.compute(id, &inputs);
		writeln!(self.console.output, "{description} = {result}")?;
		Ok(())
	}

	fn delete(&mut self) -> Result<()> {
		let index = self.read_index()?;
		self.registry.remove(index);
		debug!(index, "operation deleted");
		Ok(())
	}

	/// Runs a nested session over a command file.
	///
	/// The nested session shares the registry, console, and root stop token,
	/// and inherits the capacity. Its final capacity is copied back here. The
	/// file is closed before this returns.
	fn read_file(&mut self) -> Result<()> {
		let path = PathBuf::from(self.input().next_token()?);
		let file = File::open(&path).map_err(|source| SessionError::FileOpen {
			path: path.clone(),
			source,
		})?;
		info!(path = %path.display(), depth = self.depth + 1, "reading command file");
		let reader: Box<dyn BufRead + 'io> = Box::new(BufReader::new(file));

		let mut nested = Session {
			console: &mut *self.console,
			registry: &mut *self.registry,
			script: Some(Script {
				path,
				tokens: Tokens::new(reader),
			}),
			command_line: None,
			capacity: self.capacity,
			running: true,
			root_stop: self.root_stop.clone(),
			commands: self.commands,
			options: self.options.clone(),
			depth: self.depth + 1,
		};
		let outcome = nested.run();
		let capacity = nested.capacity;
		drop(nested);

		self.capacity = capacity;
		outcome
	}

	/// Renegotiates the capacity from the current input.
	///
	/// A rejected value leaves the capacity unset so the next iteration
	/// negotiates again. Shrinking below the current size asks for
	/// confirmation: `y` truncates, anything else keeps the previous capacity
	/// minus one.
	fn resize(&mut self) -> Result<()> {
		let previous = self.capacity.take();
		let requested = self.negotiate_capacity()?;
		self.capacity = Some(requested);
		if requested.admits(self.registry.len()) {
			return Ok(());
		}

		write!(
			self.console.output,
			"The new size is smaller than the number of operations, proceed? (y/n): "
		)?;
		self.console.output.flush()?;
		let answer = self.input().next_token()?;
		if answer == "y" {
			self.registry.truncate(requested.get());
			debug!(capacity = requested.get(), "registry truncated");
		} else {
			self.capacity = previous.map(|capacity| capacity.previous());
			if self.script.is_some() {
				self.input().skip_line();
			}
		}
		Ok(())
	}

	fn help(&mut self) -> Result<()> {
		let out = &mut self.console.output;
		writeln!(out, "The available commands are:")?;
		for def in self.commands.iter() {
			writeln!(out, "* {}", def.usage())?;
		}
		writeln!(out)?;
		Ok(())
	}

	/// Stops this session. From a file, also asks the root to stop.
	fn exit(&mut self) -> Result<()> {
		if self.script.is_some() {
			self.root_stop.request_stop();
		}
		writeln!(self.console.output, "Goodbye!")?;
		self.running = false;
		Ok(())
	}
}
