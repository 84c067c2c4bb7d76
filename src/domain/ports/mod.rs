//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod engine_probe;
pub mod sync_events;

pub use command_runner::{CommandRunner, RunMode};
pub use engine_probe::{EngineProbe, FixedProbe};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
