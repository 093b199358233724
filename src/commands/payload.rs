use crate::models::HttpMethod;
use crate::payload::{PayloadSynthesizer, persist_payload};
use crate::Result;
use colored::*;
use std::path::{Path, PathBuf};

/// Synthesize one payload, persist it and print it
pub fn execute_payload(method: HttpMethod, output_dir: &Path, seed: Option<u64>) -> Result<PathBuf> {
    let payload = match seed {
        Some(seed) => PayloadSynthesizer::seeded(seed).synthesize(),
        None => PayloadSynthesizer::from_os_rng().synthesize(),
    };

    let path = persist_payload(&payload, method, output_dir)?;
    println!("{} {} payload written to {}", "✓".green(), method, path.display());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(path)
}
