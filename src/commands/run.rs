//! Run command implementation
//!
//! Executes a generated feature file against the configured API.

use crate::config::RunConfig;
use crate::error::{FailureKind, Result};
use crate::loader::load_feature;
use crate::runner::{FeatureRunner, ReqwestTransport, RunSummary, Runner, StepBindings};
use crate::telemetry;
use colored::Colorize;
use indexmap::IndexMap;
use std::path::Path;

pub struct RunCommandArgs<'a> {
    pub feature_path: &'a Path,
    pub config_path: &'a Path,
    pub base_url: Option<&'a str>,
    pub auth_token: Option<&'a str>,
    /// Directory for `<method>_payload.json` files
    pub payload_dir: &'a Path,
}

/// Execute the run command
pub fn execute_run(args: RunCommandArgs<'_>) -> Result<RunSummary> {
    let mut overrides = IndexMap::new();
    if let Some(url) = args.base_url {
        overrides.insert("base_url".to_string(), url.to_string());
    }
    if let Some(token) = args.auth_token {
        overrides.insert("auth_token".to_string(), token.to_string());
    }

    let config = RunConfig::resolve(args.config_path, &overrides)?;
    telemetry::init_tracing(config.log_level);

    let feature = load_feature(args.feature_path)?;
    println!(
        "{} Loaded feature: {} ({} scenarios)",
        "✓".green(),
        feature.title.bold(),
        feature.scenarios.len()
    );
    println!("{} Target: {} [{}]", "→".blue(), config.base_url, config.env);

    let transport = ReqwestTransport::new(config.timeout())?;
    let bindings = StepBindings::new(&config, transport).with_payload_dir(args.payload_dir);
    let mut runner = FeatureRunner::new(bindings);

    let summary = runner.run_feature(&feature);
    print_summary(&summary);

    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    println!();
    for outcome in &summary.outcomes {
        match &outcome.error {
            None => println!("  {} {}", "✓".green(), outcome.name),
            Some(error) => {
                println!("  {} {}", "✗".red(), outcome.name);
                println!("      {}: {}", error.category(), error.to_string().red());
            }
        }
    }

    println!();
    println!(
        "{} passed, {} failed ({} assertion, {} transport, {} unrecognized step)",
        summary.passed_count().to_string().green(),
        summary.failed_count().to_string().red(),
        summary.count_of(FailureKind::Assertion),
        summary.count_of(FailureKind::Transport),
        summary.count_of(FailureKind::Authoring)
    );
}
