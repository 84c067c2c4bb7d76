//! Engine Probe Port

/// Answers whether an engine program can be found
///
/// Never fails: a missing engine is a normal answer.
pub trait EngineProbe {
    fn is_available(&self, program: &str) -> bool;
}

/// Probe with a fixed answer, for callers that already know
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl EngineProbe for FixedProbe {
    fn is_available(&self, _program: &str) -> bool {
        self.0
    }
}
