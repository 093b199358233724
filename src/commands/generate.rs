//! Generate command implementation
//!
//! Derives a feature file (and its run configuration) from an OpenAPI document.

use crate::config::{LogLevel, RunConfig};
use crate::converters::{ConvertOptions, Converter, GherkinConverter, check_title_collision, feature_path};
use crate::error::Result;
use crate::loader::{SpecModel, load_openapi, server_base_url};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct GenerateCommandArgs<'a> {
    pub openapi_path: &'a Path,
    pub title: &'a str,
    pub output_dir: &'a Path,
    /// Where to write the run configuration; `None` skips it
    pub config_path: Option<&'a Path>,
    pub base_url: Option<&'a str>,
    pub auth_token: Option<&'a str>,
    pub timeout_secs: u64,
    pub env: &'a str,
    pub log_level: LogLevel,
    /// Overwrite a feature file generated for a different title
    pub force: bool,
}

/// Files written by a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub feature: PathBuf,
    pub config: Option<PathBuf>,
    pub scenarios: usize,
}

/// Execute the generate command
pub fn execute_generate(args: GenerateCommandArgs<'_>) -> Result<GeneratedFiles> {
    let document = load_openapi(args.openapi_path)?;
    let spec = SpecModel::from_document(&document)?;
    println!(
        "{} Loaded OpenAPI file: {} ({} operations)",
        "✓".green(),
        args.openapi_path.display(),
        spec.len()
    );

    // Resolve everything that can fail before any file is touched
    let config = match args.config_path {
        Some(_) => {
            let base_url = match args.base_url {
                Some(url) => url.to_string(),
                None => server_base_url(&document)?,
            };
            println!("{} Base URL: {}", "✓".green(), base_url);
            Some(RunConfig {
                auth_token: args.auth_token.filter(|t| !t.is_empty()).map(str::to_string),
                timeout_secs: args.timeout_secs,
                log_level: args.log_level,
                env: args.env.to_string(),
                ..RunConfig::new(base_url)
            })
        }
        None => None,
    };

    let path = feature_path(args.output_dir, args.title)?;
    if path.exists() {
        if args.force {
            tracing::warn!(path = %path.display(), "Overwriting existing feature file");
        } else {
            check_title_collision(&fs::read_to_string(&path)?, args.title, &path)?;
        }
    }

    let options = ConvertOptions {
        title: args.title.to_string(),
    };
    let feature = GherkinConverter::new().convert_spec(&spec, &options)?;

    write_atomically(&path, &feature.render())?;
    println!(
        "{} Feature file generated: {} ({} scenarios)",
        "✓".green(),
        path.display(),
        feature.scenarios.len()
    );

    let config_path = match (config, args.config_path) {
        (Some(config), Some(config_path)) => {
            config.save(config_path)?;
            println!("{} Generated {}", "✓".green(), config_path.display());
            Some(config_path.to_path_buf())
        }
        _ => None,
    };

    Ok(GeneratedFiles {
        feature: path,
        config: config_path,
        scenarios: feature.scenarios.len(),
    })
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
