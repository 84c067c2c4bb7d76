//! External process plumbing
//!
//! - `probe` - engine lookup on `PATH`
//! - `runner` - the single place processes are started

mod probe;
mod runner;

pub use probe::PathProbe;
pub use runner::{ProcessRunner, DRY_RUN_MARKER};
