use clap::Parser;
use oasbdd::{
    BddError, Result,
    cli::{Cli, Commands},
    commands::{self, GenerateCommandArgs, RunCommandArgs},
    config::LogLevel,
    telemetry,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            openapi,
            title,
            output_dir,
            config,
            skip_config,
            base_url,
            auth_token,
            timeout,
            env,
            log_level,
            force,
        } => {
            telemetry::init_tracing(LogLevel::default());
            commands::execute_generate(GenerateCommandArgs {
                openapi_path: &openapi,
                title: &title,
                output_dir: &output_dir,
                config_path: (!skip_config).then_some(config.as_path()),
                base_url: base_url.as_deref(),
                auth_token: auth_token.as_deref(),
                timeout_secs: timeout,
                env: &env,
                log_level,
                force,
            })?;
        }
        Commands::Run {
            feature,
            config,
            base_url,
            auth_token,
            payload_dir,
        } => {
            let summary = commands::execute_run(RunCommandArgs {
                feature_path: &feature,
                config_path: &config,
                base_url: base_url.as_deref(),
                auth_token: auth_token.as_deref(),
                payload_dir: &payload_dir,
            })?;

            if !summary.success() {
                return Err(BddError::RunFailed {
                    failed: summary.failed_count(),
                    total: summary.outcomes.len(),
                });
            }
        }
        Commands::List { openapi } => {
            telemetry::init_tracing(LogLevel::default());
            commands::execute_list(&openapi)?;
        }
        Commands::Payload {
            method,
            output_dir,
            seed,
        } => {
            telemetry::init_tracing(LogLevel::default());
            commands::execute_payload(method.into(), &output_dir, seed)?;
        }
    }

    Ok(())
}
