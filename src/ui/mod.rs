//! Terminal UI for the dirsync binary
//!
//! Status lines, warnings, and errors all go to stderr.

pub mod console;
pub mod context;
pub mod error;
pub mod icon;
pub mod terminal;
pub mod theme;
