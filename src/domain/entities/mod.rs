//! Domain Entities
//!
//! Values with identity for the length of one command run.

mod invocation;
mod request;

pub use invocation::{Invocation, InvocationBuilder};
pub use request::{CommandKind, Operation, SyncRequest};
