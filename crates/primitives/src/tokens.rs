use std::io::{self, BufRead};
use std::str::FromStr;

use thiserror::Error;

/// Failure while pulling a token out of a [`Tokens`] stream.
#[derive(Debug, Error)]
pub enum ReadError {
	/// The underlying reader has no more tokens.
	#[error("unexpected end of input")]
	Eof,
	/// A token was present but did not parse as the requested number type.
	#[error("expected a number, found `{0}`")]
	Malformed(String),
	/// The underlying reader failed.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

impl ReadError {
	/// Returns true when the stream cannot produce any further tokens.
	pub fn is_terminal(&self) -> bool {
		matches!(self, Self::Eof | Self::Io(_))
	}
}

/// Whitespace-delimited token reader with physical line tracking.
///
/// Tokens may span any amount of whitespace, including newlines, so a command
/// and its arguments do not have to share a line. The line of the most
/// recently returned token is kept for error reporting.
#[derive(Debug)]
pub struct Tokens<R> {
	reader: R,
	buf: String,
	cursor: usize,
	buf_line: usize,
	token_line: usize,
}

impl<R: BufRead> Tokens<R> {
	/// Wraps a buffered reader.
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			buf: String::new(),
			cursor: 0,
			buf_line: 0,
			token_line: 0,
		}
	}

	/// Returns the next token, reading further lines as needed.
	pub fn next_token(&mut self) -> Result<String, ReadError> {
		loop {
			let rest = &self.buf[self.cursor..];
			if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
				let token = &rest[start..];
				let len = token.find(char::is_whitespace).unwrap_or(token.len());
				let token = token[..len].to_owned();
				self.cursor += start + len;
				self.token_line = self.buf_line;
				return Ok(token);
			}
			self.fill_line()?;
		}
	}

	/// Reads the next token and parses it as a number.
	///
	/// The token is consumed even when it fails to parse.
	pub fn next_number<T: FromStr>(&mut self) -> Result<T, ReadError> {
		let token = self.next_token()?;
		token.parse().map_err(|_| ReadError::Malformed(token))
	}

	/// Discards whatever remains of the current line.
	pub fn skip_line(&mut self) {
		self.cursor = self.buf.len();
	}

	/// One-based physical line of the last token returned, or 0 before any.
	pub fn line(&self) -> usize {
		self.token_line
	}

	fn fill_line(&mut self) -> Result<(), ReadError> {
		self.buf.clear();
		self.cursor = 0;
		if self.reader.read_line(&mut self.buf)? == 0 {
			return Err(ReadError::Eof);
		}
		self.buf_line += 1;
		Ok(())
	}
}
