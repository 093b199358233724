//! Read-only operation view over a parsed OpenAPI document

use crate::error::{BddError, Result};
use crate::models::HttpMethod;
use crate::models::openapi::{OpenApiDocument, RawOperation, RawParameterOrRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback value for query parameters that declare no schema default.
pub const DEFAULT_QUERY_VALUE: &str = "value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
}

impl std::str::FromStr for ParameterLocation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "query" => Ok(ParameterLocation::Query),
            "path" => Ok(ParameterLocation::Path),
            "header" => Ok(ParameterLocation::Header),
            "cookie" => Ok(ParameterLocation::Cookie),
            other => Err(format!("unknown parameter location '{}'", other)),
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub default: Option<serde_json::Value>,
}

impl Parameter {
    /// The value a generated step sets this parameter to.
    ///
    /// Strings are used verbatim; other scalars use their JSON spelling.
    pub fn default_text(&self) -> String {
        match &self.default {
            None | Some(serde_json::Value::Null) => DEFAULT_QUERY_VALUE.to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// One documented (path, method) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub path: String,
    pub method: HttpMethod,
    pub summary: Option<String>,
    pub operation_id: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl Operation {
    pub fn query_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Query)
    }
}

/// Operations of a document in declaration order: paths first, then the
/// verbs under each path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecModel {
    base_url: Option<String>,
    operations: Vec<Operation>,
}

impl SpecModel {
    pub fn from_document(document: &OpenApiDocument) -> Result<Self> {
        let paths = document.paths.as_ref().ok_or_else(|| {
            BddError::MalformedSpec("document has no 'paths' mapping".to_string())
        })?;

        let mut operations = Vec::new();
        for (path, item) in paths {
            for (key, value) in item {
                let Ok(method) = key.parse::<HttpMethod>() else {
                    tracing::debug!(path = %path, key = %key, "Skipping non-operation path key");
                    continue;
                };
                operations.push(Self::build_operation(path, method, value)?);
            }
        }

        Ok(Self {
            base_url: document.servers.first().map(|s| s.url.clone()),
            operations,
        })
    }

    fn build_operation(path: &str, method: HttpMethod, value: &serde_yaml::Value) -> Result<Operation> {
        let raw: RawOperation = if value.is_null() {
            RawOperation::default()
        } else {
            serde_yaml::from_value(value.clone()).map_err(|e| {
                BddError::MalformedSpec(format!("{} {}: {}", method, path, e))
            })?
        };

        let mut parameters = Vec::with_capacity(raw.parameters.len());
        for entry in raw.parameters {
            match entry {
                RawParameterOrRef::Ref { reference } => {
                    tracing::warn!(
                        path = %path,
                        method = %method,
                        reference = %reference,
                        "Parameter references are not resolved; skipping"
                    );
                }
                RawParameterOrRef::Item(param) => {
                    let location = param.location.parse::<ParameterLocation>().map_err(|e| {
                        BddError::MalformedSpec(format!(
                            "{} {} parameter '{}': {}",
                            method, path, param.name, e
                        ))
                    })?;
                    parameters.push(Parameter {
                        name: param.name,
                        location,
                        default: param.schema.and_then(|s| s.default),
                    });
                }
            }
        }

        Ok(Operation {
            path: path.to_string(),
            method,
            summary: raw.summary,
            operation_id: raw.operation_id,
            parameters,
        })
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
