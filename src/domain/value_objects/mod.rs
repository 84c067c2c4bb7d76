//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod endpoint;
mod exclusions;
mod side;
mod strategy;
mod warning;

pub use endpoint::{translate_remote, Dialect, Endpoint};
pub use exclusions::{ArgFragment, ExclusionSet};
pub use side::Side;
pub use strategy::Strategy;
pub use warning::SyncWarning;
