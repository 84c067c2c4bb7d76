//! Sync Event Port
//!
//! Provides an observable interface for sync runs.
//! Enables console progress, JSON event streams, and silent operation.

use crate::domain::entities::CommandKind;
use crate::domain::value_objects::{Strategy, SyncWarning};
use serde::Serialize;

/// Event emitted while a request is carried out
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SyncEvent {
    /// Executor strategy chosen for the request
    StrategySelected {
        command: CommandKind,
        strategy: Strategy,
        steps: usize,
        dry_run: bool,
    },

    /// Non-fatal condition
    Warning { warning: SyncWarning },

    /// A step's invocation is about to run
    StepStarted {
        index: usize,
        label: CommandKind,
        program: String,
    },

    /// A step's invocation completed successfully
    StepFinished { index: usize, label: CommandKind },

    /// Every step completed
    Completed {
        strategy: Strategy,
        steps: usize,
        dry_run: bool,
    },
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait SyncEventSink {
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_event_tag() {
        let event = SyncEvent::StepStarted {
            index: 0,
            label: CommandKind::Pull,
            program: "rsync".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "step_started");
        assert_eq!(json["label"], "pull");
        assert_eq!(json["program"], "rsync");
    }

    #[test]
    fn warning_event_nests_warning_kind() {
        let event = SyncEvent::Warning {
            warning: SyncWarning::DegradedMode {
                engine: "unison".to_string(),
                ignored_preference: None,
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "warning");
        assert_eq!(json["warning"]["kind"], "degraded_mode");
    }
}
