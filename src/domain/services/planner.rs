//! Sync planning service
//!
//! Pure domain logic for choosing an executor strategy and collecting the
//! invocations it needs. The capability answer is computed by the caller.

use super::executors;
use crate::config::EngineConfig;
use crate::domain::entities::{CommandKind, Invocation, Operation, SyncRequest};
use crate::domain::value_objects::{Endpoint, Strategy, SyncWarning};

/// One labelled unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// `sync` for the two-way run, `pull`/`push` for one-way copies
    pub label: CommandKind,
    pub invocation: Invocation,
}

/// Steps to run in order, plus the warnings that go with them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    pub strategy: Strategy,
    pub steps: Vec<Step>,
    pub warnings: Vec<SyncWarning>,
}

impl SyncPlan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Choose the strategy for `request`.
///
/// `bidirectional_available` only matters for `sync`; `push`/`pull` never
/// consult it.
pub fn select_strategy(request: &SyncRequest, bidirectional_available: bool) -> Strategy {
    match request.operation() {
        Operation::Sync { .. } if bidirectional_available => Strategy::Bidirectional,
        Operation::Sync { .. } => Strategy::Mirror,
        Operation::Push { .. } | Operation::Pull { .. } => Strategy::OneWay,
    }
}

/// Build the full plan for `request`.
pub fn plan(config: &EngineConfig, request: &SyncRequest, bidirectional_available: bool) -> SyncPlan {
    let strategy = select_strategy(request, bidirectional_available);
    let exclusions = request.exclusions();
    let mut warnings = Vec::new();

    let steps = match (request.operation(), strategy) {
        (Operation::Sync { left, right, prefer }, Strategy::Bidirectional) => vec![Step {
            label: CommandKind::Sync,
            invocation: executors::bidirectional(config, left, right, exclusions, *prefer),
        }],
        (Operation::Sync { left, right, prefer }, _) => {
            warnings.push(SyncWarning::DegradedMode {
                engine: config.bidirectional.clone(),
                ignored_preference: *prefer,
            });
            warnings.extend(ambiguity_warnings([left, right]));
            let [pull, push] = executors::mirror(config, left, right, exclusions);
            vec![
                Step {
                    label: CommandKind::Pull,
                    invocation: pull,
                },
                Step {
                    label: CommandKind::Push,
                    invocation: push,
                },
            ]
        }
        (Operation::Push { src, dst } | Operation::Pull { src, dst }, _) => {
            warnings.extend(ambiguity_warnings([src, dst]));
            vec![Step {
                label: request.kind(),
                invocation: executors::one_way(config, src, dst, exclusions),
            }]
        }
    };

    SyncPlan {
        strategy,
        steps,
        warnings,
    }
}

/// Warnings for endpoints rsync would read as a bare remote host
fn ambiguity_warnings(endpoints: [&Endpoint; 2]) -> Vec<SyncWarning> {
    endpoints
        .into_iter()
        .filter_map(|endpoint| {
            endpoint.ambiguous_host().map(|host| SyncWarning::AmbiguousEndpoint {
                endpoint: endpoint.clone(),
                host: host.to_string(),
            })
        })
        .collect()
}
