use clap::Parser;
use propline::adapters::build_stats_provider;
use propline::api::{start_api_server, AppState};
use propline::cli::{self, Cli, Commands, OutputMode};
use propline::config::AppConfig;
use propline::error::{PropError, Result};
use propline::strategy::SuggestionEngine;
use tracing::{info, warn};

mod main_runtime;

use main_runtime::{init_logging, init_logging_simple, shutdown_signal};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli.config);

    match cli.command {
        Some(Commands::Players { json }) => {
            init_logging_simple();
            let provider = build_stats_provider(&config.provider)?;
            cli::list_players(provider.as_ref(), OutputMode::from_json_flag(json)).await?;
        }
        Some(Commands::Suggest { id, json }) => {
            init_logging_simple();
            let provider = build_stats_provider(&config.provider)?;
            let engine = SuggestionEngine::new();
            cli::show_suggestions(provider.as_ref(), &engine, id, OutputMode::from_json_flag(json))
                .await?;
        }
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await?;
        }
        None => run_server(config).await?,
    }

    Ok(())
}

/// Load config from `dir`, falling back to built-in defaults
fn load_config(dir: &str) -> AppConfig {
    match AppConfig::load_from(dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: could not load config from {} ({}), using defaults", dir, e);
            AppConfig::default_config()
        }
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    init_logging(&config.logging);

    if let Err(errors) = config.validate() {
        for e in &errors {
            warn!("config: {}", e);
        }
        return Err(PropError::Internal(format!(
            "invalid configuration: {}",
            errors.join("; ")
        )));
    }

    info!(environment = %config.environment, "Starting propline");

    let provider = build_stats_provider(&config.provider)?;
    let state = AppState::new(provider, config.environment.clone());

    start_api_server(state, &config.server.host, config.server.port, shutdown_signal()).await
}
