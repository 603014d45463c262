//! Reference-counted storage for operation nodes.
//!
//! Combinators refer to their operands by [`OperationId`] rather than by
//! position, so reordering or deleting registry slots never disturbs an
//! existing operation. A node stays alive while a registry slot or another
//! node holds it; releasing the last holder frees it and releases its
//! operands in turn.
//!
//! Nodes can only reference ids that already exist when they are created,
//! which keeps the operand graph acyclic.

use setcalc_primitives::Set;
use slab::Slab;
use tracing::trace;

use crate::RegistryError;

/// Largest number of input sets a single operation may take.
pub const MAX_ARITY: usize = 1 << 10;

/// Stable handle to a node in an [`OperationArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(usize);

/// Binary ways of combining two operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
	Union,
	Intersection,
	Difference,
	/// Pairwise products of the operand results.
	Product,
	/// Feeds the first operand's result into the second operand's first input.
	Compose,
}

impl Combinator {
	/// Infix symbol used in descriptions. Composition has none.
	pub const fn symbol(self) -> Option<&'static str> {
		match self {
			Self::Union => Some("∪"),
			Self::Intersection => Some("∩"),
			Self::Difference => Some("-"),
			Self::Product => Some("*"),
			Self::Compose => None,
		}
	}

	/// Input count of a combinator over operands with the given arities, or
	/// `None` past [`MAX_ARITY`].
	pub const fn arity(self, lhs: usize, rhs: usize) -> Option<usize> {
		let Some(sum) = lhs.checked_add(rhs) else {
			return None;
		};
		let arity = match self {
			Self::Compose => sum.saturating_sub(1),
			_ => sum,
		};
		if arity > MAX_ARITY { None } else { Some(arity) }
	}

	fn apply(self, lhs: &Set, rhs: &Set) -> Set {
		match self {
			Self::Union => lhs.union(rhs),
			Self::Intersection => lhs.intersection(rhs),
			Self::Difference => lhs.difference(rhs),
			Self::Product => lhs.product(rhs),
			Self::Compose => unreachable!("composition is evaluated by threading results"),
		}
	}
}

/// An immutable operation node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	/// Returns its single input unchanged.
	Identity,
	/// Combines two earlier operations.
	Binary {
		combinator: Combinator,
		lhs: OperationId,
		rhs: OperationId,
		arity: usize,
	},
}

impl Operation {
	pub const fn arity(&self) -> usize {
		match self {
			Self::Identity => 1,
			Self::Binary { arity, .. } => *arity,
		}
	}

	fn operands(&self) -> Option<(OperationId, OperationId)> {
		match *self {
			Self::Identity => None,
			Self::Binary { lhs, rhs, .. } => Some((lhs, rhs)),
		}
	}
}

#[derive(Debug)]
struct Node {
	op: Operation,
	holders: usize,
}

/// Slab of operation nodes with holder counts.
#[derive(Debug, Default)]
pub struct OperationArena {
	nodes: Slab<Node>,
}

impl OperationArena {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of live nodes, including ones only reachable through other nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns true when `id` refers to a live node.
	pub fn contains(&self, id: OperationId) -> bool {
		self.nodes.contains(id.0)
	}

	/// Allocates an unheld identity node.
	pub fn identity(&mut self) -> OperationId {
		self.insert(Operation::Identity)
	}

	/// Allocates an unheld combinator node and takes a hold on both operands.
	///
	/// Fails without touching the arena when the result would take more than
	/// [`MAX_ARITY`] inputs.
	pub fn combine(
		&mut self,
		combinator: Combinator,
		lhs: OperationId,
		rhs: OperationId,
	) -> Result<OperationId, RegistryError> {
		let arity = combinator
			.arity(self.arity(lhs), self.arity(rhs))
			.ok_or(RegistryError::TooManyInputs(MAX_ARITY))?;
		Ok(self.link(combinator, lhs, rhs, arity))
	}

	/// Allocates an unheld combinator over two fresh identities.
	pub fn combine_identities(&mut self, combinator: Combinator) -> OperationId {
		let lhs = self.identity();
		let rhs = self.identity();
		let arity = match combinator {
			Combinator::Compose => 1,
			_ => 2,
		};
		self.link(combinator, lhs, rhs, arity)
	}

	fn link(&mut self, combinator: Combinator, lhs: OperationId, rhs: OperationId, arity: usize) -> OperationId {
		self.retain(lhs);
		self.retain(rhs);
		self.insert(Operation::Binary {
			combinator,
			lhs,
			rhs,
			arity,
		})
	}

	fn insert(&mut self, op: Operation) -> OperationId {
		OperationId(self.nodes.insert(Node { op, holders: 0 }))
	}

	/// Adds a holder to `id`.
	pub fn retain(&mut self, id: OperationId) {
		self.nodes[id.0].holders += 1;
	}

	/// Drops a holder from `id`, freeing every node that becomes unheld.
	pub fn release(&mut self, id: OperationId) {
		let mut pending = vec![id];
		while let Some(id) = pending.pop() {
			let node = &mut self.nodes[id.0];
			node.holders = node.holders.saturating_sub(1);
			if node.holders > 0 {
				continue;
			}
			let node = self.nodes.remove(id.0);
			trace!(node = id.0, "freed operation node");
			if let Some((lhs, rhs)) = node.op.operands() {
				pending.push(lhs);
				pending.push(rhs);
			}
		}
	}

	pub fn get(&self, id: OperationId) -> &Operation {
		&self.nodes[id.0].op
	}

	pub fn arity(&self, id: OperationId) -> usize {
		self.get(id).arity()
	}

	/// Evaluates `id` over exactly `arity(id)` inputs.
	pub fn compute(&self, id: OperationId, inputs: &[Set]) -> Set {
		debug_assert_eq!(inputs.len(), self.arity(id));
		match *self.get(id) {
			Operation::Identity => inputs[0].clone(),
			Operation::Binary {
				combinator: Combinator::Compose,
				lhs,
				rhs,
				..
			} => {
				let split = self.arity(lhs);
				let mut threaded = Vec::with_capacity(inputs.len() - split + 1);
				threaded.push(self.compute(lhs, &inputs[..split]));
				threaded.extend_from_slice(&inputs[split..]);
				self.compute(rhs, &threaded)
			}
			Operation::Binary {
				combinator, lhs, rhs, ..
			} => {
				let split = self.arity(lhs);
				let left = self.compute(lhs, &inputs[..split]);
				let right = self.compute(rhs, &inputs[split..]);
				combinator.apply(&left, &right)
			}
		}
	}

	/// Renders `id` with `inputs` standing in for its inputs, in order.
	///
	/// Nested combinators are parenthesised; the outermost one is not.
	pub fn describe<S: AsRef<str>>(&self, id: OperationId, inputs: &[S]) -> String {
		debug_assert_eq!(inputs.len(), self.arity(id));
		match *self.get(id) {
			Operation::Identity => inputs[0].as_ref().to_owned(),
			Operation::Binary {
				combinator: Combinator::Compose,
				lhs,
				rhs,
				..
			} => {
				let split = self.arity(lhs);
				let mut threaded = Vec::with_capacity(inputs.len() - split + 1);
				threaded.push(self.describe_operand(lhs, &inputs[..split]));
				threaded.extend(inputs[split..].iter().map(|s| s.as_ref().to_owned()));
				self.describe(rhs, &threaded)
			}
			Operation::Binary {
				combinator, lhs, rhs, ..
			} => {
				let split = self.arity(lhs);
				format!(
					"{} {} {}",
					self.describe_operand(lhs, &inputs[..split]),
					combinator.symbol().unwrap_or("∘"),
					self.describe_operand(rhs, &inputs[split..]),
				)
			}
		}
	}

	fn describe_operand<S: AsRef<str>>(&self, id: OperationId, inputs: &[S]) -> String {
		let text = self.describe(id, inputs);
		match self.get(id) {
			Operation::Identity => text,
			Operation::Binary { .. } => format!("({text})"),
		}
	}

	/// Every node reachable from `id`, including `id` itself.
	#[cfg(test)]
	pub(crate) fn reachable(&self, id: OperationId) -> Vec<OperationId> {
		let mut seen = Vec::new();
		let mut pending = vec![id];
		while let Some(id) = pending.pop() {
			if seen.contains(&id) {
				continue;
			}
			seen.push(id);
			if let Some((lhs, rhs)) = self.get(id).operands() {
				pending.push(lhs);
				pending.push(rhs);
			}
		}
		seen
	}
}
