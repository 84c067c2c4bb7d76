//! Configuration module for dirsync
//!
//! The command line is the only configuration surface. No files or
//! environment variables are read; this module holds the engine programs and
//! the fixed flag sets passed to them.

/// Bidirectional engine program
pub const DEFAULT_BIDIRECTIONAL_ENGINE: &str = "unison";

/// One-way engine program
pub const DEFAULT_ONE_WAY_ENGINE: &str = "rsync";

/// Unison preferences: batch mode, confirm big deletions, keep mtimes,
/// ignore permission bits, fast change detection.
pub const BIDIRECTIONAL_FLAGS: &[&str] = &[
    "-batch",
    "-confirmbigdel",
    "-times",
    "-perms",
    "0",
    "-fastcheck",
    "true",
];

/// Rsync options: archive mode, delete extraneous files, show progress.
pub const ONE_WAY_FLAGS: &[&str] = &["-a", "--delete", "--progress"];

/// Engine programs used to build invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub bidirectional: String,
    pub one_way: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bidirectional: DEFAULT_BIDIRECTIONAL_ENGINE.to_string(),
            one_way: DEFAULT_ONE_WAY_ENGINE.to_string(),
        }
    }
}
