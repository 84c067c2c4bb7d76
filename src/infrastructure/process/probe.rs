//! Engine availability on the search path

use crate::domain::ports::EngineProbe;
use tracing::debug;

/// Looks engines up on `PATH` without running them
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl PathProbe {
    pub fn new() -> Self {
        Self
    }
}

impl EngineProbe for PathProbe {
    fn is_available(&self, program: &str) -> bool {
        match which::which(program) {
            Ok(path) => {
                debug!(program, path = %path.display(), "engine found");
                true
            }
            Err(err) => {
                debug!(program, error = %err, "engine not found");
                false
            }
        }
    }
}
