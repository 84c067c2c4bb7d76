//! Error types for dirsync
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

/// Result type alias for dirsync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Exit status for malformed or incomplete arguments
pub const EXIT_USAGE: i32 = 2;

/// Exit status when an engine program cannot be launched at all
pub const EXIT_LAUNCH: i32 = 127;

/// Main error type for dirsync operations
///
/// None of these are retried: a failed engine may already have mutated
/// either endpoint, and the engine's own status is the best report we have.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Malformed or incomplete command line
    #[error("{message}")]
    Usage { message: String },

    /// External engine exited with a non-zero status
    #[error("{program} failed with exit code {code}")]
    Execution { program: String, code: i32 },

    /// External engine was terminated by a signal
    #[error("{program} was terminated by signal {signal}")]
    Signaled { program: String, signal: i32 },

    /// External engine could not be started
    #[error("failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing operator output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Process exit status the binary should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => EXIT_USAGE,
            Self::Execution { code, .. } => *code,
            Self::Signaled { signal, .. } => 128 + signal,
            Self::Launch { .. } => EXIT_LAUNCH,
            Self::Io(_) => 1,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
