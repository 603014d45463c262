//! Core value types for the set calculator: integer sets and the
//! whitespace-delimited token stream they are read from.

/// Finite sets of integers.
pub mod set;
/// Whitespace tokenizer over buffered readers.
pub mod tokens;

pub use set::Set;
pub use tokens::{ReadError, Tokens};
