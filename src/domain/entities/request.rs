//! SyncRequest entity - a validated command line

use crate::domain::value_objects::{Endpoint, ExclusionSet, Side};
use crate::error::{SyncError, SyncResult};
use serde::Serialize;
use std::fmt;

/// Name of the requested command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Sync,
    Push,
    Pull,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Sync => write!(f, "sync"),
            CommandKind::Push => write!(f, "push"),
            CommandKind::Pull => write!(f, "pull"),
        }
    }
}

/// Command together with the endpoints it operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Sync {
        left: Endpoint,
        right: Endpoint,
        prefer: Option<Side>,
    },
    Push {
        src: Endpoint,
        dst: Endpoint,
    },
    Pull {
        src: Endpoint,
        dst: Endpoint,
    },
}

impl Operation {
    pub fn kind(&self) -> CommandKind {
        match self {
            Operation::Sync { .. } => CommandKind::Sync,
            Operation::Push { .. } => CommandKind::Push,
            Operation::Pull { .. } => CommandKind::Pull,
        }
    }

    /// Option names and values of both endpoints, in display order
    fn endpoints(&self) -> [(&'static str, &Endpoint); 2] {
        match self {
            Operation::Sync { left, right, .. } => [("--left", left), ("--right", right)],
            Operation::Push { src, dst } | Operation::Pull { src, dst } => {
                [("--src", src), ("--dst", dst)]
            }
        }
    }
}

/// Everything an executor needs, checked once up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    operation: Operation,
    exclusions: ExclusionSet,
    dry_run: bool,
}

impl SyncRequest {
    /// Build a request, rejecting blank endpoints with a usage error
    pub fn new(operation: Operation, exclusions: ExclusionSet, dry_run: bool) -> SyncResult<Self> {
        for (option, endpoint) in operation.endpoints() {
            if endpoint.is_empty() {
                return Err(SyncError::usage(format!(
                    "{} requires a non-empty path for '{}'",
                    operation.kind(),
                    option
                )));
            }
        }

        Ok(Self {
            operation,
            exclusions,
            dry_run,
        })
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn kind(&self) -> CommandKind {
        self.operation.kind()
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
