pub mod feature;
pub mod openapi;
pub mod spec_model;

pub use feature::{load_feature, parse_feature};
pub use openapi::{load_openapi, parse_openapi, server_base_url};
pub use spec_model::{Operation, Parameter, ParameterLocation, SpecModel};
