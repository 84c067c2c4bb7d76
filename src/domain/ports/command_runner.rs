//! Command Runner Port
//!
//! Every external process goes through this trait, so dry-run and live
//! runs share argument construction.

use crate::domain::entities::Invocation;
use crate::error::SyncResult;

/// Whether invocations are rendered or executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Live,
    DryRun,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            RunMode::DryRun
        } else {
            RunMode::Live
        }
    }
}

/// Consumes invocations one at a time
pub trait CommandRunner {
    /// Run (or render) one invocation, blocking until it completes
    fn run(&mut self, invocation: Invocation) -> SyncResult<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, invocation: Invocation) -> SyncResult<()> {
        (**self).run(invocation)
    }
}
