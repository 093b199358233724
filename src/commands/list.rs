use crate::converters::ScenarioBuilder;
use crate::loader::{self, SpecModel};
use crate::Result;
use colored::*;
use std::path::Path;

pub fn execute_list(openapi_path: &Path) -> Result<()> {
    println!("{}", "Loading OpenAPI file...".bright_blue());
    println!("  Path: {}", openapi_path.display());

    let document = loader::load_openapi(openapi_path)?;
    let spec = SpecModel::from_document(&document)?;

    println!("\n{}", "✓ OpenAPI loaded successfully".green());
    if let Some(ref info) = document.info {
        println!("  Title: {}", info.title.bold());
        println!("  Version: {}", info.version);
    }
    if let Some(base_url) = spec.base_url() {
        println!("  Server: {}", base_url);
    }
    println!();

    if spec.is_empty() {
        println!("{}", "No operations found".yellow());
        return Ok(());
    }

    println!("{}", format!("Operations ({}):", spec.len()).bold());
    for (idx, op) in spec.operations().iter().enumerate() {
        match op.operation_id.as_deref() {
            Some(id) => println!(
                "  {}. {} {} ({})",
                idx + 1,
                op.method.to_string().bright_cyan(),
                op.path.bold(),
                id.dimmed()
            ),
            None => println!(
                "  {}. {} {}",
                idx + 1,
                op.method.to_string().bright_cyan(),
                op.path.bold()
            ),
        }
        println!("     Scenario: {}", ScenarioBuilder::scenario_name(op));

        for param in op.query_parameters() {
            println!(
                "       {} = {}",
                param.name.bright_yellow(),
                param.default_text()
            );
        }
    }

    Ok(())
}
