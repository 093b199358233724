//! Gherkin feature assembly
//!
//! Walks every operation of a [`SpecModel`] and collects the scenarios under
//! one `Feature:` header.

use super::scenario::ScenarioBuilder;
use super::{ConvertOptions, Converter};
use crate::error::Result;
use crate::loader::{Operation, SpecModel};
use crate::models::{FeatureDocument, Scenario};

#[derive(Debug, Clone, Default)]
pub struct GherkinConverter {
    builder: ScenarioBuilder,
}

impl GherkinConverter {
    pub fn new() -> Self {
        Self {
            builder: ScenarioBuilder::new(),
        }
    }

    /// One scenario per operation, in document order.
    pub fn assemble(&self, spec: &SpecModel, title: &str) -> FeatureDocument {
        let scenarios = spec
            .operations()
            .iter()
            .map(|op| self.builder.build(op))
            .collect();

        FeatureDocument {
            title: title.to_string(),
            scenarios,
        }
    }
}

impl Converter for GherkinConverter {
    type Output = FeatureDocument;

    fn convert_spec(&self, spec: &SpecModel, options: &ConvertOptions) -> Result<Self::Output> {
        let document = self.assemble(spec, &options.title);
        tracing::debug!(
            title = %document.title,
            scenarios = document.scenarios.len(),
            "Assembled feature document"
        );
        Ok(document)
    }

    fn convert_operation(&self, operation: &Operation) -> Result<Scenario> {
        Ok(self.builder.build(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_openapi;

    fn spec(yaml: &str) -> SpecModel {
        SpecModel::from_document(&parse_openapi(yaml).unwrap()).unwrap()
    }

    fn options(title: &str) -> ConvertOptions {
        ConvertOptions {
            title: title.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_feature_text() {
        let model = spec(
            r#"
paths:
  /pet/findByStatus:
    get:
      summary: Find pets
      parameters:
        - name: status
          in: query
          schema:
            default: available
"#,
        );

        let document = GherkinConverter::new()
            .convert_spec(&model, &options("Petstore"))
            .unwrap();

        assert_eq!(
            document.render(),
            "Feature: Petstore\n\
             \n  Scenario: Find pets\n\
             \x20   Given I have the API endpoint \"/pet/findByStatus\"\n\
             \x20   And I set query parameter \"status\" to \"available\"\n\
             \x20   When I send a GET request\n\
             \x20   Then the response code should be 200\n"
        );
    }

    #[test]
    fn test_scenario_count_matches_operation_count() {
        let model = spec(
            r#"
paths:
  /pet:
    post: {summary: Add pet}
    put: {summary: Add pet}
  /pet/{petId}:
    get: {}
    delete: {}
    patch: {}
  /store/inventory:
    get: {}
"#,
        );

        let document = GherkinConverter::new().assemble(&model, "Pets");
        assert_eq!(document.scenarios.len(), 6);
        // Duplicate names are kept
        assert_eq!(document.scenarios[0].name, document.scenarios[1].name);
        assert_eq!(document.scenarios[2].name, "GET pet petId");
    }

    #[test]
    fn test_empty_paths_yields_header_only() {
        let document = GherkinConverter::new().assemble(&spec("paths: {}\n"), "Empty API");
        assert_eq!(document.render(), "Feature: Empty API\n");
    }

    #[test]
    fn test_generation_is_idempotent() {
        let yaml = r#"
paths:
  /a:
    get:
      parameters:
        - {name: x, in: query, schema: {default: 3}}
    post: {}
"#;
        let converter = GherkinConverter::new();
        let first = converter.assemble(&spec(yaml), "Twice").render();
        let second = converter.assemble(&spec(yaml), "Twice").render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_operation() {
        let model = spec("paths:\n  /ping:\n    get: {summary: Ping}\n");
        let scenario = GherkinConverter::new()
            .convert_operation(&model.operations()[0])
            .unwrap();
        assert_eq!(scenario.name, "Ping");
        assert_eq!(scenario.steps.len(), 3);
    }
}
