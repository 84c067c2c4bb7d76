//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::io;

use crate::application::SyncUseCase;
use crate::config::EngineConfig;
use crate::domain::ports::RunMode;
use crate::infrastructure::{PathProbe, ProcessRunner};

/// Type alias for the concrete SyncUseCase with all dependencies
pub type ConcreteSyncUseCase = SyncUseCase<PathProbe, ProcessRunner<io::Stdout>>;

/// Create a sync use case that probes `PATH` and renders or runs on stdout
pub fn create_sync_use_case(dry_run: bool) -> ConcreteSyncUseCase {
    create_sync_use_case_with_config(dry_run, EngineConfig::default())
}

/// Create a sync use case with specific engine programs
pub fn create_sync_use_case_with_config(dry_run: bool, config: EngineConfig) -> ConcreteSyncUseCase {
    let runner = ProcessRunner::stdout(RunMode::from_dry_run(dry_run));
    SyncUseCase::new(PathProbe::new(), runner, config)
}
