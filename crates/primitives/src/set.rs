use std::collections::BTreeSet;
use std::fmt;
use std::io::BufRead;

use crate::tokens::{ReadError, Tokens};

/// A finite set of integers kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Set {
	items: BTreeSet<i32>,
}

impl Set {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads a count followed by that many integers from `tokens`.
	///
	/// Duplicates collapse, so the resulting set may be smaller than the count.
	pub fn read<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Self, ReadError> {
		let count: usize = tokens.next_number()?;
		(0..count).map(|_| tokens.next_number::<i32>()).collect()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn contains(&self, value: i32) -> bool {
		self.items.contains(&value)
	}

	/// Iterates elements in ascending order.
	pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
		self.items.iter().copied()
	}

	pub fn union(&self, other: &Set) -> Set {
		self.items.union(&other.items).copied().collect()
	}

	pub fn intersection(&self, other: &Set) -> Set {
		self.items.intersection(&other.items).copied().collect()
	}

	pub fn difference(&self, other: &Set) -> Set {
		self.items.difference(&other.items).copied().collect()
	}

	/// Every pairwise product `x * y` for `x` in `self` and `y` in `other`.
	///
	/// Products saturate at the `i32` bounds.
	pub fn product(&self, other: &Set) -> Set {
		self.iter()
			.flat_map(|x| other.iter().map(move |y| x.saturating_mul(y)))
			.collect()
	}
}

impl FromIterator<i32> for Set {
	fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl<const N: usize> From<[i32; N]> for Set {
	fn from(items: [i32; N]) -> Self {
		items.into_iter().collect()
	}
}

impl fmt::Display for Set {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (i, item) in self.items.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{item}")?;
		}
		f.write_str("}")
	}
}

#[cfg(test)]
mod tests;
