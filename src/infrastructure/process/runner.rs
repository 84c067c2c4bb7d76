//! Process-backed command runner
//!
//! Dry-run writes the rendered invocation to the output writer. Live mode
//! runs the program with inherited stdio and waits for it.

use crate::domain::entities::Invocation;
use crate::domain::ports::{CommandRunner, RunMode};
use crate::error::{SyncError, SyncResult};
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Prefix of every rendered dry-run line
pub const DRY_RUN_MARKER: &str = "[dry-run] ";

pub struct ProcessRunner<W: Write> {
    mode: RunMode,
    out: W,
    launched: usize,
}

impl ProcessRunner<io::Stdout> {
    /// Runner whose dry-run output goes to stdout
    pub fn stdout(mode: RunMode) -> Self {
        Self::with_writer(mode, io::stdout())
    }
}

impl<W: Write> ProcessRunner<W> {
    /// Create a runner writing dry-run output to a custom writer (for testing)
    pub fn with_writer(mode: RunMode, out: W) -> Self {
        Self {
            mode,
            out,
            launched: 0,
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Number of processes started so far
    pub fn launched(&self) -> usize {
        self.launched
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn render(&mut self, invocation: &Invocation) -> SyncResult<()> {
        writeln!(self.out, "{}{}", DRY_RUN_MARKER, invocation.render())?;
        self.out.flush()?;
        Ok(())
    }

    fn execute(&mut self, invocation: &Invocation) -> SyncResult<()> {
        info!(command = %invocation, "running");
        self.launched += 1;

        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| SyncError::Launch {
                program: invocation.program().to_string(),
                source,
            })?;

        debug!(program = invocation.program(), ?status, "finished");
        check_status(invocation.program(), status)
    }
}

impl<W: Write> CommandRunner for ProcessRunner<W> {
    fn run(&mut self, invocation: Invocation) -> SyncResult<()> {
        match self.mode {
            RunMode::DryRun => self.render(&invocation),
            RunMode::Live => self.execute(&invocation),
        }
    }
}

fn check_status(program: &str, status: ExitStatus) -> SyncResult<()> {
    if status.success() {
        return Ok(());
    }

    if let Some(code) = status.code() {
        return Err(SyncError::Execution {
            program: program.to_string(),
            code,
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Err(SyncError::Signaled {
                program: program.to_string(),
                signal,
            });
        }
    }

    Err(SyncError::Execution {
        program: program.to_string(),
        code: 1,
    })
}
