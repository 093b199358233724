pub mod cli;
pub mod commands;
pub mod config;
pub mod converters;
pub mod error;
pub mod loader;
pub mod models;
pub mod payload;
pub mod runner;
pub mod telemetry;

pub use error::{BddError, FailureKind, Result};
