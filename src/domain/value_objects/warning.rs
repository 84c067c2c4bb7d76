//! Non-fatal warnings surfaced to the operator

use super::{Endpoint, Side};
use serde::Serialize;
use std::fmt;

/// A condition worth telling the operator about that does not stop the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncWarning {
    /// The bidirectional engine is missing; the mirror strategy runs instead
    DegradedMode {
        engine: String,
        /// `--prefer` side the mirror strategy cannot honour
        #[serde(skip_serializing_if = "Option::is_none")]
        ignored_preference: Option<Side>,
    },
    /// A colon-style endpoint that may have been meant as a local path
    AmbiguousEndpoint { endpoint: Endpoint, host: String },
}

impl SyncWarning {
    pub fn title(&self) -> &'static str {
        match self {
            SyncWarning::DegradedMode { .. } => "Bidirectional engine unavailable",
            SyncWarning::AmbiguousEndpoint { .. } => "Ambiguous endpoint",
        }
    }

    /// Explanatory lines shown under the title
    pub fn details(&self) -> Vec<String> {
        match self {
            SyncWarning::DegradedMode {
                engine,
                ignored_preference,
            } => {
                let mut lines = vec![
                    format!("'{}' was not found on PATH; falling back to two-pass mirroring.", engine),
                    "Pulls right -> left, then pushes left -> right.".to_string(),
                    "A file changed on both sides ends up with the left side's content.".to_string(),
                ];
                if let Some(side) = ignored_preference {
                    lines.push(format!(
                        "--prefer {} is ignored in this mode; the left side always wins.",
                        side
                    ));
                }
                lines
            }
            SyncWarning::AmbiguousEndpoint { endpoint, host } => vec![
                format!("'{}' will be sent to remote host '{}'.", endpoint, host),
                format!("Write './{}' to use a local path instead.", endpoint),
            ],
        }
    }
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.details().join(" "))
    }
}
