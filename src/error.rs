use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BddError {
    #[error("Malformed OpenAPI document: {0}")]
    MalformedSpec(String),

    #[error("Failed to load OpenAPI file: {0}")]
    OpenApiLoadError(String),

    #[error("Unrecognized step: {0}")]
    UnrecognizedStep(String),

    #[error("Step '{step}' is not allowed while {state}")]
    StepOutOfOrder { step: String, state: String },

    #[error("Scenario ended before the response code was asserted ({0})")]
    IncompleteScenario(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Expected response code {expected}, got {actual}")]
    AssertionFailure { expected: u16, actual: u16 },

    #[error(
        "Feature title '{title}' collides with '{existing}' already written to {}",
        .path.display()
    )]
    TitleCollision {
        title: String,
        existing: String,
        path: PathBuf,
    },

    #[error("Invalid feature title: {0}")]
    InvalidTitle(String),

    #[error("Feature file error: {0}")]
    FeatureParseError(String),

    #[error("{failed} of {total} scenarios failed")]
    RunFailed { failed: usize, total: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Coarse classification used when reporting a failed scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The response arrived but its status did not match.
    Assertion,
    /// The request never completed.
    Transport,
    /// The feature text uses a phrase no binding understands.
    Authoring,
    /// Steps arrived in an order the bindings cannot execute.
    Protocol,
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Assertion => write!(f, "assertion failure"),
            FailureKind::Transport => write!(f, "transport error"),
            FailureKind::Authoring => write!(f, "unrecognized step"),
            FailureKind::Protocol => write!(f, "step order violation"),
            FailureKind::Other => write!(f, "error"),
        }
    }
}

impl BddError {
    pub fn category(&self) -> FailureKind {
        match self {
            BddError::AssertionFailure { .. } => FailureKind::Assertion,
            BddError::Transport(_) => FailureKind::Transport,
            BddError::UnrecognizedStep(_) => FailureKind::Authoring,
            BddError::StepOutOfOrder { .. } | BddError::IncompleteScenario(_) => {
                FailureKind::Protocol
            }
            _ => FailureKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, BddError>;
