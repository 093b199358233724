use super::naming::normalize_name;
use crate::loader::Operation;
use crate::models::{Scenario, Step, StepKeyword};
use crate::runner::StepKind;

/// Status every generated scenario expects
pub const EXPECTED_STATUS: u16 = 200;

/// Derives one scenario per operation.
///
/// Steps always come out as: the endpoint, one step per query parameter in
/// declaration order, the body marker for POST/PUT/PATCH, the request and the
/// status assertion.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder;

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn scenario_name(operation: &Operation) -> String {
        let name = operation
            .summary
            .clone()
            .unwrap_or_else(|| format!("{} {}", operation.method, operation.path));
        normalize_name(&name)
    }

    pub fn build(&self, operation: &Operation) -> Scenario {
        let mut steps = vec![Step::new(
            StepKeyword::Given,
            StepKind::Endpoint(operation.path.clone()).phrase(),
        )];

        for param in operation.query_parameters() {
            let kind = StepKind::QueryParam {
                key: param.name.clone(),
                value: param.default_text(),
            };
            steps.push(Step::new(StepKeyword::And, kind.phrase()));
        }

        if operation.method.has_body() {
            steps.push(Step::new(StepKeyword::And, StepKind::BodyMarker.phrase()));
        }

        steps.push(Step::new(
            StepKeyword::When,
            StepKind::SendRequest(operation.method).phrase(),
        ));
        steps.push(Step::new(
            StepKeyword::Then,
            StepKind::AssertStatus(EXPECTED_STATUS).phrase(),
        ));

        Scenario {
            name: Self::scenario_name(operation),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{Parameter, ParameterLocation};
    use crate::models::HttpMethod;

    fn query(name: &str, default: Option<serde_json::Value>) -> Parameter {
        Parameter {
            name: name.to_string(),
            location: ParameterLocation::Query,
            default,
        }
    }

    fn operation(method: HttpMethod, parameters: Vec<Parameter>) -> Operation {
        Operation {
            path: "/pet".to_string(),
            method,
            summary: None,
            operation_id: None,
            parameters,
        }
    }

    fn keywords(scenario: &Scenario) -> Vec<StepKeyword> {
        scenario.steps.iter().map(|s| s.keyword).collect()
    }

    #[test]
    fn test_get_with_two_query_parameters() {
        let op = operation(
            HttpMethod::Get,
            vec![
                query("a", Some(serde_json::json!(1))),
                query("b", Some(serde_json::json!(2))),
            ],
        );

        let scenario = ScenarioBuilder::new().build(&op);

        assert_eq!(
            keywords(&scenario),
            vec![
                StepKeyword::Given,
                StepKeyword::And,
                StepKeyword::And,
                StepKeyword::When,
                StepKeyword::Then
            ]
        );
        assert_eq!(scenario.steps[1].text, r#"I set query parameter "a" to "1""#);
        assert_eq!(scenario.steps[2].text, r#"I set query parameter "b" to "2""#);
        assert_eq!(scenario.steps[3].text, "I send a GET request");
    }

    #[test]
    fn test_post_without_parameters() {
        let scenario = ScenarioBuilder::new().build(&operation(HttpMethod::Post, vec![]));

        assert_eq!(scenario.steps.len(), 4);
        assert_eq!(scenario.steps[0].text, r#"I have the API endpoint "/pet""#);
        assert_eq!(scenario.steps[1].text, "I send the request body with required data");
        assert_eq!(scenario.steps[2].text, "I send a POST request");
        assert_eq!(scenario.steps[3].text, "the response code should be 200");
    }

    #[test]
    fn test_delete_has_no_body_marker() {
        let scenario = ScenarioBuilder::new().build(&operation(HttpMethod::Delete, vec![]));
        assert_eq!(scenario.steps.len(), 3);
        assert_eq!(scenario.steps[2].text, "the response code should be 200");
    }

    #[test]
    fn test_only_query_parameters_become_steps() {
        let mut op = operation(HttpMethod::Patch, vec![query("q", None)]);
        op.parameters.insert(
            0,
            Parameter {
                name: "petId".to_string(),
                location: ParameterLocation::Path,
                default: None,
            },
        );

        let scenario = ScenarioBuilder::new().build(&op);
        assert_eq!(scenario.steps.len(), 5);
        assert_eq!(scenario.steps[1].text, r#"I set query parameter "q" to "value""#);
        assert_eq!(scenario.steps[2].text, "I send the request body with required data");
    }

    #[test]
    fn test_scenario_name() {
        let mut op = operation(HttpMethod::Put, vec![]);
        assert_eq!(ScenarioBuilder::scenario_name(&op), "PUT pet");

        op.summary = Some("Update an existing pet.".to_string());
        assert_eq!(ScenarioBuilder::scenario_name(&op), "Update an existing pet");
    }
}
