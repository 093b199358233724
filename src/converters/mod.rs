//! Converters for generating test scenarios from OpenAPI operations
//!
//! This module provides the conversion trait and the Gherkin implementation
//! that turns a [`SpecModel`] into a feature document.

pub mod feature;
pub mod naming;
pub mod scenario;

pub use feature::GherkinConverter;
pub use naming::{check_title_collision, feature_path, normalize_name, title_stem};
pub use scenario::ScenarioBuilder;

use crate::error::Result;
use crate::loader::{Operation, SpecModel};
use crate::models::Scenario;

/// Configuration options for converters
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Title written in the `Feature:` header
    pub title: String,
}

/// Trait for converting OpenAPI operations to test scenarios
pub trait Converter {
    /// The output type of the conversion
    type Output;

    /// Convert every operation of a document
    fn convert_spec(&self, spec: &SpecModel, options: &ConvertOptions) -> Result<Self::Output>;

    /// Convert a single operation to a scenario
    fn convert_operation(&self, operation: &Operation) -> Result<Scenario>;
}
