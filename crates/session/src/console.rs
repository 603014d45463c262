use std::io::{BufRead, Write};

use setcalc_primitives::Tokens;

/// Token stream over any buffered reader.
pub type Input<'io> = Tokens<Box<dyn BufRead + 'io>>;

/// The operator's input and the shared output sink.
///
/// Every session in a nesting chain writes to the same console, and
/// file-error confirmations are always read from its input.
pub struct Console<'io> {
	pub(crate) input: Input<'io>,
	pub(crate) output: Box<dyn Write + 'io>,
}

impl<'io> Console<'io> {
	pub fn new(input: impl BufRead + 'io, output: impl Write + 'io) -> Self {
		let input: Box<dyn BufRead + 'io> = Box::new(input);
		Self {
			input: Tokens::new(input),
			output: Box::new(output),
		}
	}
}
