//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition and request validation
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{parse_args, Cli, ColorWhen, Commands, ParseOutcome};
pub use factory::{create_sync_use_case, create_sync_use_case_with_config};
