//! Executor strategy selected for a request

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One run of the two-way engine with both endpoints
    Bidirectional,
    /// One-way pull then one-way push
    Mirror,
    /// A single one-way copy
    OneWay,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bidirectional => write!(f, "bidirectional"),
            Strategy::Mirror => write!(f, "mirror"),
            Strategy::OneWay => write!(f, "one-way"),
        }
    }
}
