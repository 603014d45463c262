use setcalc_primitives::Set;

use crate::names::placeholders;
use crate::{Combinator, OperationArena, OperationId, RegistryError};

/// Ordered, index-addressed list of user-visible operations.
///
/// Positions are not identities: removing slot `i` shifts every later slot
/// down by one. Each slot holds its node in the [`OperationArena`], so nodes
/// referenced by other operations outlive their slot.
///
/// The registry itself does not enforce a capacity. Callers append first and
/// roll back with [`OperationRegistry::pop`] when the result is too large.
#[derive(Debug, Default)]
pub struct OperationRegistry {
	arena: OperationArena,
	slots: Vec<OperationId>,
}

impl OperationRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates the startup registry: union, intersection, and difference of
	/// two identities.
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		for combinator in [Combinator::Union, Combinator::Intersection, Combinator::Difference] {
			let id = registry.arena.combine_identities(combinator);
			registry.push(id);
		}
		registry
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub fn arena(&self) -> &OperationArena {
		&self.arena
	}

	/// Resolves a user-supplied index to the operation in that slot.
	pub fn resolve(&self, index: i64) -> Result<OperationId, RegistryError> {
		usize::try_from(index)
			.ok()
			.and_then(|i| self.slots.get(i).copied())
			.ok_or(RegistryError::OperationNotFound(index))
	}

	/// Appends `id` to the end of the registry.
	pub fn push(&mut self, id: OperationId) -> usize {
		self.arena.retain(id);
		self.slots.push(id);
		self.slots.len() - 1
	}

	/// Builds a combinator over two resolved operations and appends it.
	///
	/// Returns the index of the new slot. Nothing is appended when the
	/// combinator would take too many inputs.
	pub fn push_combinator(
		&mut self,
		combinator: Combinator,
		lhs: OperationId,
		rhs: OperationId,
	) -> Result<usize, RegistryError> {
		let id = self.arena.combine(combinator, lhs, rhs)?;
		Ok(self.push(id))
	}

	/// Removes the slot at `index`, shifting later slots down.
	pub fn remove(&mut self, index: usize) -> Option<OperationId> {
		if index >= self.slots.len() {
			return None;
		}
		let id = self.slots.remove(index);
		self.arena.release(id);
		Some(id)
	}

	/// Removes the last slot.
	pub fn pop(&mut self) -> Option<OperationId> {
		let id = self.slots.pop()?;
		self.arena.release(id);
		Some(id)
	}

	/// Drops every slot from `len` onwards.
	pub fn truncate(&mut self, len: usize) {
		while self.slots.len() > len {
			self.pop();
		}
	}

	/// Operation ids in slot order.
	pub fn iter(&self) -> impl Iterator<Item = OperationId> + '_ {
		self.slots.iter().copied()
	}

	pub fn arity(&self, id: OperationId) -> usize {
		self.arena.arity(id)
	}

	/// Renders `id` over placeholder input names.
	pub fn describe(&self, id: OperationId) -> String {
		self.arena.describe(id, &placeholders(self.arity(id)))
	}

	/// Renders `id` with concrete sets in place of its inputs.
	pub fn describe_with(&self, id: OperationId, inputs: &[Set]) -> String {
		let rendered: Vec<String> = inputs.iter().map(Set::to_string).collect();
		self.arena.describe(id, &rendered)
	}

	pub fn compute(&self, id: OperationId, inputs: &[Set]) -> Set {
		self.arena.compute(id, inputs)
	}
}
