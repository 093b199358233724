//! Execution of generated features against a live API
//!
//! Scenarios run one after another with a fresh context each. A failing
//! scenario is recorded and the run moves on to the next one.

pub mod bindings;
pub mod feature;
pub mod http;
pub mod steps;

pub use bindings::{ExecutionState, ScenarioContext, StepBindings};
pub use feature::FeatureRunner;
pub use http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use steps::StepKind;

use crate::error::{BddError, FailureKind};
use crate::models::FeatureDocument;

/// Outcome of a single scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    /// Number of steps that completed before the scenario stopped
    pub steps_run: usize,
    pub error: Option<BddError>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error.as_ref().map(BddError::category)
    }
}

/// Aggregate result of running one feature
#[derive(Debug, Default)]
pub struct RunSummary {
    pub title: String,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunSummary {
    /// A run passes only if every scenario passed.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    pub fn count_of(&self, kind: FailureKind) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.failure_kind() == Some(kind))
            .count()
    }
}

/// Trait for feature runners
pub trait Runner {
    fn run_feature(&mut self, feature: &FeatureDocument) -> RunSummary;
}
