pub mod gherkin;
pub mod openapi;
pub mod payload;

pub use gherkin::{FeatureDocument, HttpMethod, Scenario, Step, StepKeyword};
pub use openapi::OpenApiDocument;
pub use payload::{Category, CategoryName, Payload, PetStatus, Tag};
