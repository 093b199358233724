use crate::config::{DEFAULT_CONFIG_PATH, DEFAULT_ENV, DEFAULT_TIMEOUT_SECS, LogLevel};
use crate::models::HttpMethod;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oasbdd")]
#[command(version)]
#[command(about = "Generate and run BDD API tests from OpenAPI documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a feature file and run configuration from an OpenAPI document
    Generate {
        /// Path to OpenAPI file (YAML or JSON)
        #[arg(short, long)]
        openapi: PathBuf,

        /// Feature title; also names the feature file
        #[arg(short, long)]
        title: String,

        /// Directory for the feature file
        #[arg(short = 'O', long, default_value = "features")]
        output_dir: PathBuf,

        /// Path of the generated run configuration
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Do not write the run configuration
        #[arg(long)]
        skip_config: bool,

        /// Base URL override (defaults to the first server in the document)
        #[arg(long)]
        base_url: Option<String>,

        /// Bearer token sent with every request
        #[arg(long)]
        auth_token: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// Environment label (e.g. dev, qa, prod)
        #[arg(long, default_value = DEFAULT_ENV)]
        env: String,

        /// Logging level for test runs (DEBUG, INFO, WARNING)
        #[arg(long, default_value = "INFO")]
        log_level: LogLevel,

        /// Overwrite a feature file generated for a different title
        #[arg(long)]
        force: bool,
    },

    /// Run a feature file against the configured API
    Run {
        /// Path to feature file
        #[arg(short, long)]
        feature: PathBuf,

        /// Path to run configuration
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Base URL override for API requests
        #[arg(long)]
        base_url: Option<String>,

        /// Bearer token override
        #[arg(long)]
        auth_token: Option<String>,

        /// Directory for synthesized payload files
        #[arg(long, default_value = ".")]
        payload_dir: PathBuf,
    },

    /// List operations in an OpenAPI file
    List {
        /// Path to OpenAPI file
        #[arg(short, long)]
        openapi: PathBuf,
    },

    /// Synthesize a request payload file
    Payload {
        /// Request method the payload is for
        #[arg(short, long, default_value = "post")]
        method: PayloadMethod,

        /// Directory for the payload file
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: PathBuf,

        /// Seed for a reproducible payload
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PayloadMethod {
    /// post_payload.json
    Post,
    /// put_payload.json
    Put,
}

impl From<PayloadMethod> for HttpMethod {
    fn from(method: PayloadMethod) -> Self {
        match method {
            PayloadMethod::Post => HttpMethod::Post,
            PayloadMethod::Put => HttpMethod::Put,
        }
    }
}
