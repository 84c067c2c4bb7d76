//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod executors;
mod planner;

pub use planner::{plan, select_strategy, Step, SyncPlan};
