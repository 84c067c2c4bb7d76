//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Engine probing and process execution
//! - `events/` - Event sinks

pub mod events;
pub mod process;

pub use events::JsonEventSink;
pub use process::{PathProbe, ProcessRunner, DRY_RUN_MARKER};
