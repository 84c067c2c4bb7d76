//! Sync Use Case
//!
//! Orchestrates one command run:
//! 1. Probe for the bidirectional engine (`sync` only)
//! 2. Plan the executor strategy
//! 3. Report the strategy and any warnings
//! 4. Hand each step's invocation to the runner, in order, stopping at the
//!    first failure
//!
//! All argument construction lives in domain services.

use crate::config::EngineConfig;
use crate::domain::entities::{CommandKind, SyncRequest};
use crate::domain::ports::{CommandRunner, EngineProbe, SyncEvent, SyncEventSink};
use crate::domain::services;
use crate::domain::value_objects::Strategy;
use crate::error::SyncResult;
use tracing::{debug, info};

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    pub strategy: Strategy,
    pub steps: usize,
    pub dry_run: bool,
}

/// Sync use case, parameterized by its ports
pub struct SyncUseCase<P, R>
where
    P: EngineProbe,
    R: CommandRunner,
{
    probe: P,
    runner: R,
    config: EngineConfig,
}

impl<P, R> SyncUseCase<P, R>
where
    P: EngineProbe,
    R: CommandRunner,
{
    pub fn new(probe: P, runner: R, config: EngineConfig) -> Self {
        Self {
            probe,
            runner,
            config,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Execute the request, emitting events as it goes
    ///
    /// Engine failures propagate unchanged; steps already run are not undone.
    pub fn execute(
        &mut self,
        request: &SyncRequest,
        events: &dyn SyncEventSink,
    ) -> SyncResult<SyncOutcome> {
        let available = match request.kind() {
            CommandKind::Sync => {
                let found = self.probe.is_available(&self.config.bidirectional);
                debug!(engine = %self.config.bidirectional, found, "probed bidirectional engine");
                found
            }
            CommandKind::Push | CommandKind::Pull => false,
        };

        let plan = services::plan(&self.config, request, available);
        info!(command = %request.kind(), strategy = %plan.strategy, steps = plan.len(), "plan ready");

        events.on_event(SyncEvent::StrategySelected {
            command: request.kind(),
            strategy: plan.strategy,
            steps: plan.len(),
            dry_run: request.dry_run(),
        });
        for warning in plan.warnings {
            events.on_event(SyncEvent::Warning { warning });
        }

        let steps = plan.steps.len();
        for (index, step) in plan.steps.into_iter().enumerate() {
            events.on_event(SyncEvent::StepStarted {
                index,
                label: step.label,
                program: step.invocation.program().to_string(),
            });
            self.runner.run(step.invocation)?;
            events.on_event(SyncEvent::StepFinished {
                index,
                label: step.label,
            });
        }

        events.on_event(SyncEvent::Completed {
            strategy: plan.strategy,
            steps,
            dry_run: request.dry_run(),
        });

        Ok(SyncOutcome {
            strategy: plan.strategy,
            steps,
            dry_run: request.dry_run(),
        })
    }
}
