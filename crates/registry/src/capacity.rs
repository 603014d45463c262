use std::fmt;

use crate::CapacityError;

/// Upper bound on the number of operations a registry may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(usize);

impl Capacity {
	/// Exclusive lower bound accepted by [`Capacity::new`].
	pub const LOWER: i64 = 3;
	/// Exclusive upper bound accepted by [`Capacity::new`].
	pub const UPPER: i64 = 100;

	/// Validates a user-supplied capacity.
	pub fn new(requested: i64) -> Result<Self, CapacityError> {
		if requested > Self::LOWER && requested < Self::UPPER {
			Ok(Self(requested as usize))
		} else {
			Err(CapacityError::OutOfRange(requested))
		}
	}

	pub const fn get(self) -> usize {
		self.0
	}

	/// One less than `self`.
	///
	/// Used when an operator declines a shrinking resize. The result is not
	/// re-validated against the negotiation range.
	pub const fn previous(self) -> Self {
		Self(self.0.saturating_sub(1))
	}

	/// Returns true when `len` operations fit.
	pub const fn admits(self, len: usize) -> bool {
		len <= self.0
	}
}

impl fmt::Display for Capacity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
