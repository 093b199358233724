use super::bindings::{ExecutionState, ScenarioContext, StepBindings};
use super::http::HttpTransport;
use super::{RunSummary, Runner, ScenarioOutcome};
use crate::error::BddError;
use crate::models::{FeatureDocument, Scenario};
use rand::RngCore;

/// Runs every scenario of a feature through one set of step bindings
pub struct FeatureRunner<'a, T: HttpTransport, R: RngCore> {
    bindings: StepBindings<'a, T, R>,
}

impl<'a, T: HttpTransport, R: RngCore> FeatureRunner<'a, T, R> {
    pub fn new(bindings: StepBindings<'a, T, R>) -> Self {
        Self { bindings }
    }

    pub fn run_scenario(&mut self, scenario: &Scenario) -> ScenarioOutcome {
        let span = tracing::info_span!("scenario", name = %scenario.name);
        let _enter = span.enter();

        let mut ctx = ScenarioContext::new();
        let mut steps_run = 0;

        for step in &scenario.steps {
            if let Err(error) = self.bindings.execute_step(&mut ctx, step) {
                tracing::warn!(step = %step.text, "Scenario failed: {}", error);
                return ScenarioOutcome {
                    name: scenario.name.clone(),
                    steps_run,
                    error: Some(error),
                };
            }
            steps_run += 1;
        }

        let error = (ctx.state != ExecutionState::Done)
            .then(|| BddError::IncompleteScenario(format!("stopped while {}", ctx.state)));

        ScenarioOutcome {
            name: scenario.name.clone(),
            steps_run,
            error,
        }
    }
}

impl<T: HttpTransport, R: RngCore> Runner for FeatureRunner<'_, T, R> {
    fn run_feature(&mut self, feature: &FeatureDocument) -> RunSummary {
        tracing::info!(
            title = %feature.title,
            env = %self.bindings.config().env,
            "Running {} scenarios",
            feature.scenarios.len()
        );

        let outcomes = feature
            .scenarios
            .iter()
            .map(|scenario| self.run_scenario(scenario))
            .collect();

        RunSummary {
            title: feature.title.clone(),
            outcomes,
        }
    }
}
