//! The static command vocabulary.
//!
//! Lookup is an exact match on a single token. Entries keep their table order
//! for help output.

/// A resolved command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	/// The token matched no entry.
	Invalid,
	Read,
	Resize,
	Eval,
	Union,
	Intersection,
	Difference,
	Product,
	Compose,
	Del,
	Help,
	Exit,
}

/// A command table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDef {
	/// Token typed to invoke the command.
	pub name: &'static str,
	/// Argument synopsis shown in help.
	pub args: &'static str,
	/// Help text.
	pub description: &'static str,
	pub command: Command,
}

impl CommandDef {
	/// One help line: name, arguments, and description.
	pub fn usage(&self) -> String {
		if self.args.is_empty() {
			format!("{} - {}", self.name, self.description)
		} else {
			format!("{} {} - {}", self.name, self.args, self.description)
		}
	}
}

const BUILTIN: &[CommandDef] = &[
	CommandDef {
		name: "read",
		args: "path",
		description: "read commands from a file",
		command: Command::Read,
	},
	CommandDef {
		name: "resize",
		args: "num",
		description: "change the maximum number of operations",
		command: Command::Resize,
	},
	CommandDef {
		name: "eval",
		args: "num sets...",
		description: "compute operation #num on the following set(s); each set is prefixed with the count of numbers to read",
		command: Command::Eval,
	},
	CommandDef {
		name: "uni",
		args: "num1 num2",
		description: "create the union of operation #num1 and operation #num2",
		command: Command::Union,
	},
	CommandDef {
		name: "inter",
		args: "num1 num2",
		description: "create the intersection of operation #num1 and operation #num2",
		command: Command::Intersection,
	},
	CommandDef {
		name: "diff",
		args: "num1 num2",
		description: "create the difference of operation #num1 and operation #num2",
		command: Command::Difference,
	},
	CommandDef {
		name: "prod",
		args: "num1 num2",
		description: "create the pairwise product of the results of operation #num1 and operation #num2",
		command: Command::Product,
	},
	CommandDef {
		name: "comp",
		args: "num1 num2",
		description: "create the composition of operation #num1 and operation #num2",
		command: Command::Compose,
	},
	CommandDef {
		name: "del",
		args: "num",
		description: "delete operation #num from the operation list",
		command: Command::Del,
	},
	CommandDef {
		name: "help",
		args: "",
		description: "print this command list",
		command: Command::Help,
	},
	CommandDef {
		name: "exit",
		args: "",
		description: "exit the program",
		command: Command::Exit,
	},
];

/// Ordered token-to-command mapping.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
	defs: &'static [CommandDef],
}

impl CommandTable {
	/// The calculator's command set.
	pub const fn builtin() -> Self {
		Self { defs: BUILTIN }
	}

	/// Resolves a token, yielding [`Command::Invalid`] on a miss.
	pub fn resolve(&self, token: &str) -> Command {
		self.defs
			.iter()
			.find(|def| def.name == token)
			.map_or(Command::Invalid, |def| def.command)
	}

	/// Entries in table order.
	pub fn iter(&self) -> impl Iterator<Item = &'static CommandDef> {
		self.defs.iter()
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}
}

impl Default for CommandTable {
	fn default() -> Self {
		Self::builtin()
	}
}
