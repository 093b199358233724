use crate::error::{BddError, Result};
use crate::models::{FeatureDocument, Scenario, Step, StepKeyword};
use gherkin::{GherkinEnv, StepType};
use std::fs;
use std::path::Path;

/// Load a feature file for execution
pub fn load_feature<P: AsRef<Path>>(path: P) -> Result<FeatureDocument> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_feature(&content)
}

/// Parse feature-file text back into a [`FeatureDocument`].
///
/// Background steps are prepended to every scenario and scenarios nested in
/// `Rule:` blocks are flattened in document order. Step text is kept as
/// written; matching it against the step vocabulary happens at execution time
/// so that a bad step only fails its own scenario.
pub fn parse_feature(content: &str) -> Result<FeatureDocument> {
    let feature = gherkin::Feature::parse(content, GherkinEnv::default())
        .map_err(|e| BddError::FeatureParseError(e.to_string()))?;

    let background: Vec<Step> = feature
        .background
        .iter()
        .flat_map(|b| b.steps.iter())
        .map(convert_step)
        .collect();

    let scenarios = feature
        .scenarios
        .iter()
        .chain(feature.rules.iter().flat_map(|r| r.scenarios.iter()))
        .map(|scenario| {
            if !scenario.examples.is_empty() {
                tracing::warn!(scenario = %scenario.name, "Examples tables are not expanded");
            }
            let mut steps = background.clone();
            steps.extend(scenario.steps.iter().map(convert_step));
            Scenario {
                name: scenario.name.trim().to_string(),
                steps,
            }
        })
        .collect();

    Ok(FeatureDocument {
        title: feature.name.trim().to_string(),
        scenarios,
    })
}

fn convert_step(step: &gherkin::Step) -> Step {
    let keyword = match step.keyword.trim() {
        "Given" => StepKeyword::Given,
        "When" => StepKeyword::When,
        "Then" => StepKeyword::Then,
        "And" | "But" | "*" => StepKeyword::And,
        // Localized keywords
        _ => match step.ty {
            StepType::Given => StepKeyword::Given,
            StepType::When => StepKeyword::When,
            StepType::Then => StepKeyword::Then,
        },
    };
    Step::new(keyword, step.value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"# generated
Feature: Petstore
  Exercises the pet endpoints.

  Scenario: Find pets
    Given I have the API endpoint "/pet/findByStatus"
    And I set query parameter "status" to "available"
    When I send a GET request
    Then the response code should be 200

  Scenario: Add pet
    Given I have the API endpoint "/pet"
    But I send the request body with required data
    When I send a POST request
    Then the response code should be 200
"#;

    #[test]
    fn test_parse_feature() {
        let doc = parse_feature(SAMPLE).unwrap();
        assert_eq!(doc.title, "Petstore");
        assert_eq!(doc.scenarios.len(), 2);
        assert_eq!(doc.scenarios[0].name, "Find pets");
        assert_eq!(doc.scenarios[0].steps.len(), 4);
        assert_eq!(
            doc.scenarios[0].steps[1],
            Step::new(StepKeyword::And, r#"I set query parameter "status" to "available""#)
        );
        assert_eq!(doc.scenarios[1].steps[1].keyword, StepKeyword::And);
    }

    #[test]
    fn test_missing_header() {
        let err = parse_feature("  Scenario: x\n").unwrap_err();
        assert!(matches!(err, BddError::FeatureParseError(_)));
    }

    #[test]
    fn test_background_is_prepended() {
        let text = "Feature: X\n\n  Background:\n    Given I have the API endpoint \"/a\"\n\n  Scenario: y\n    When I send a GET request\n    Then the response code should be 200\n";
        let doc = parse_feature(text).unwrap();
        assert_eq!(doc.scenarios[0].steps.len(), 3);
        assert_eq!(doc.scenarios[0].steps[0].keyword, StepKeyword::Given);
    }

    #[test]
    fn test_quoted_values_survive() {
        let text = "Feature: X\n\n  Scenario: y\n    Given I have the API endpoint \"/a\"\n    And I set query parameter \"tags\" to \"[\"a\",\"b\"]\"\n";
        let doc = parse_feature(text).unwrap();
        assert_eq!(
            doc.scenarios[0].steps[1].text,
            r#"I set query parameter "tags" to "["a","b"]""#
        );
    }

    #[test]
    fn test_header_only_feature() {
        let doc = parse_feature("Feature: Nothing here\n").unwrap();
        assert_eq!(doc.title, "Nothing here");
        assert!(doc.scenarios.is_empty());
    }
}
