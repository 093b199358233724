use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs that produce scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Methods that carry a JSON request body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    /// Methods that get a synthesized payload when no body was set.
    pub fn synthesizes_payload(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("unsupported HTTP method: {}", other)),
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKeyword {
    Given,
    And,
    When,
    Then,
}

impl StepKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKeyword::Given => "Given",
            StepKeyword::And => "And",
            StepKeyword::When => "When",
            StepKeyword::Then => "Then",
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub keyword: StepKeyword,
    /// Step phrase with placeholder values already substituted
    pub text: String,
}

impl Step {
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Render as indented Gherkin lines, without a trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.steps.len() + 1);
        lines.push(format!("  Scenario: {}", self.name));
        for step in &self.steps {
            lines.push(format!("    {} {}", step.keyword, step.text));
        }
        lines.join("\n")
    }
}

/// A generated feature: one title and the scenarios derived for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDocument {
    pub title: String,
    pub scenarios: Vec<Scenario>,
}

impl FeatureDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scenarios: Vec::new(),
        }
    }

    /// Serialize to feature-file text.
    ///
    /// The header is followed by each scenario preceded by a blank line, and
    /// every scenario block ends with a newline.
    pub fn render(&self) -> String {
        let mut out = format!("Feature: {}\n", self.title);
        for scenario in &self.scenarios {
            out.push('\n');
            out.push_str(&scenario.render());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for FeatureDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("Patch".parse::<HttpMethod>(), Ok(HttpMethod::Patch));
        assert!("HEAD".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_http_method_body_rules() {
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Patch.synthesizes_payload());
        assert!(HttpMethod::Put.synthesizes_payload());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_render_empty_feature() {
        let doc = FeatureDocument::new("Empty");
        assert_eq!(doc.render(), "Feature: Empty\n");
    }

    #[test]
    fn test_render_separates_scenarios_with_blank_line() {
        let scenario = |name: &str| Scenario {
            name: name.to_string(),
            steps: vec![Step::new(StepKeyword::When, "I send a GET request")],
        };
        let doc = FeatureDocument {
            title: "Two".to_string(),
            scenarios: vec![scenario("first"), scenario("second")],
        };

        assert_eq!(
            doc.render(),
            "Feature: Two\n\n  Scenario: first\n    When I send a GET request\n\n  Scenario: second\n    When I send a GET request\n"
        );
    }
}
