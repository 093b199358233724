use crate::error::{BddError, Result};
use crate::models::OpenApiDocument;
use std::fs;
use std::path::Path;

/// Load an OpenAPI document from a YAML or JSON file
pub fn load_openapi<P: AsRef<Path>>(path: P) -> Result<OpenApiDocument> {
    let path = path.as_ref();

    // Read the file
    let content = fs::read_to_string(path).map_err(|e| {
        BddError::OpenApiLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    parse_openapi(&content)
}

/// Parse OpenAPI text; JSON is accepted since it is valid YAML
pub fn parse_openapi(content: &str) -> Result<OpenApiDocument> {
    let document: OpenApiDocument = serde_yaml::from_str(content).map_err(|e| {
        BddError::OpenApiLoadError(format!("Failed to parse OpenAPI YAML: {}", e))
    })?;

    if document.paths.is_none() {
        return Err(BddError::MalformedSpec(
            "document has no 'paths' mapping".to_string(),
        ));
    }

    Ok(document)
}

/// The first server URL, which generated configuration uses as base URL
pub fn server_base_url(document: &OpenApiDocument) -> Result<String> {
    document
        .servers
        .first()
        .map(|server| server.url.clone())
        .ok_or_else(|| {
            BddError::MalformedSpec("document has no 'servers' entry to take a base URL from".to_string())
        })
}
