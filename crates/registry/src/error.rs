use thiserror::Error;

use crate::Capacity;

/// Errors raised while addressing the operation registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// The index is outside `[0, len)`.
	#[error("operation {0} doesn't exist")]
	OperationNotFound(i64),
	/// A new combinator would take more input sets than the limit allows.
	#[error("operation would take more than {0} input sets")]
	TooManyInputs(usize),
}

/// Errors raised while negotiating or enforcing a capacity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapacityError {
	/// A requested capacity is outside the accepted range.
	#[error(
		"the number of operations must be between {lower} and {upper} (exclusive), got {0}",
		lower = Capacity::LOWER,
		upper = Capacity::UPPER
	)]
	OutOfRange(i64),
	/// Adding an operation would grow the registry past its capacity.
	#[error("reached the maximum of {0} operations; delete operations in order to add more")]
	Exceeded(usize),
}
