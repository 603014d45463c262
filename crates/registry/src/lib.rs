//! Operation storage for the set calculator.
//!
//! This crate provides the pieces sessions build on:
//! - [`OperationArena`]: reference-counted operation nodes behind stable [`OperationId`]s
//! - [`OperationRegistry`]: the ordered, index-addressed list of user-visible operations
//! - [`Capacity`]: the negotiated upper bound on registry size
//! - [`CommandTable`]: the static command vocabulary and its help text

pub mod arena;
pub mod capacity;
pub mod command_table;
pub mod error;
pub mod names;
pub mod operations;

pub use arena::{Combinator, MAX_ARITY, Operation, OperationArena, OperationId};
pub use capacity::Capacity;
pub use command_table::{Command, CommandDef, CommandTable};
pub use error::{CapacityError, RegistryError};
pub use names::placeholder;
pub use operations::OperationRegistry;
