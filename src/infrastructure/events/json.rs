//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that writes one JSON object per line
///
/// Defaults to stderr so dry-run renderings keep stdout to themselves.
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stderr
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let Ok(line) = serde_json::to_string(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
