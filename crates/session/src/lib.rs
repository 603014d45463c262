//! Command sessions for the set calculator.
//!
//! A [`Session`] reads commands from its input, mutates a shared
//! [`OperationRegistry`](setcalc_registry::OperationRegistry), and writes
//! results to a [`Console`]. The `read` command runs a nested session over a
//! file; nested sessions share the registry, the console, and the root
//! [`StopToken`].

mod console;
mod error;
mod session;
mod stop;

pub use console::{Console, Input};
pub use error::{Result, SessionError};
pub use session::{Session, SessionOptions};
pub use stop::StopToken;
