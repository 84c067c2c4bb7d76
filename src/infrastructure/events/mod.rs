//! Event Sink Implementations
//!
//! Provides concrete implementations of SyncEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sink lives with the terminal UI in the binary.

mod json;

pub use json::JsonEventSink;
