use std::io;
use std::path::PathBuf;

use setcalc_primitives::ReadError;
use setcalc_registry::{CapacityError, RegistryError};
use thiserror::Error;

/// Why a command failed.
///
/// Every variant except [`SessionError::Output`] is recovered by the session
/// loop; [`SessionError::EndOfInput`] also ends the session.
#[derive(Debug, Error)]
pub enum SessionError {
	/// A numeric argument did not parse.
	#[error("expected a number, found `{0}`")]
	Malformed(String),
	/// The input stream is exhausted or unreadable.
	#[error("end of input")]
	EndOfInput,
	/// A capacity was out of range or the registry outgrew it.
	#[error(transparent)]
	Capacity(#[from] CapacityError),
	/// An operation index did not resolve.
	#[error(transparent)]
	Registry(#[from] RegistryError),
	/// A command file could not be opened.
	#[error("cannot open {}: {source}", .path.display())]
	FileOpen {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	/// The command token is not in the command table.
	#[error("command not found: {0}")]
	UnknownCommand(String),
	/// Writing to the console failed.
	#[error("failed to write output: {0}")]
	Output(#[from] io::Error),
}

impl From<ReadError> for SessionError {
	fn from(err: ReadError) -> Self {
		match err {
			ReadError::Malformed(token) => Self::Malformed(token),
			ReadError::Eof => Self::EndOfInput,
			ReadError::Io(err) => {
				tracing::warn!(error = %err, "input stream failed");
				Self::EndOfInput
			}
		}
	}
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
