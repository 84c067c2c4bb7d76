//! dirsync - bidirectional folder synchronization helper
//!
//! dirsync reconciles two directory trees, local or remote, by driving
//! existing engines: `unison` for true two-way sync when it is installed,
//! and two `rsync` passes (pull, then push) when it is not. It never moves
//! bytes itself; it picks a strategy, builds the engine command lines, and
//! runs or prints them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{SyncOutcome, SyncUseCase};
pub use config::EngineConfig;
pub use domain::entities::{CommandKind, Invocation, Operation, SyncRequest};
pub use domain::value_objects::{translate_remote, Dialect, Endpoint, ExclusionSet, Side, Strategy};
pub use error::{SyncError, SyncResult};
