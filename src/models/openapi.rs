use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The subset of an OpenAPI document the generator reads.
///
/// Paths and the keys beneath them are kept in `IndexMap`s so that scenarios
/// come out in the order the document declares them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// The OpenAPI version string (e.g., "3.0.0"), informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    #[serde(default)]
    pub servers: Vec<Server>,

    /// `path -> key -> value`; keys are HTTP verbs or path-level fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<IndexMap<String, PathItem>>,
}

pub type PathItem = IndexMap<String, serde_yaml::Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Operation object as it appears under a path and verb.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub parameters: Vec<RawParameterOrRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Item(RawParameter),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<RawSchema>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}
