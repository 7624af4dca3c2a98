// src/main.rs
mod cli;

use clap::Parser;
use cli::{Args, apply_runtime_overrides, is_config_operation};
use football_standings::config::Config;
use football_standings::error::AppError;
use football_standings::football::{HttpGateway, ResolverSettings, StandingsResolver};
use football_standings::{logging, server};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        return run_config_operation(args).await;
    }

    let mut config = Config::load().await?;
    apply_runtime_overrides(&args, &mut config);
    config.validate()?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) =
        logging::setup_logging(args.log_file.as_deref(), config.log_file_path.as_deref()).await?;
    info!("Starting football_standings v{}", football_standings::VERSION);
    info!("Logs are being written to: {log_file_path}");

    if config.api_key.is_empty() {
        warn!("No API key configured; upstream requests will fail and return empty results");
    }
    if config.offline_mode {
        info!("Starting in offline mode");
    }

    let gateway = HttpGateway::from_config(&config)?;
    let resolver = Arc::new(StandingsResolver::new(
        Arc::new(gateway),
        ResolverSettings::from_config(&config),
    ));

    let listener = TcpListener::bind(&config.listen_addr).await.map_err(|e| {
        AppError::server_error(format!("Failed to bind {}: {e}", config.listen_addr))
    })?;

    server::serve(listener, resolver, shutdown_signal()).await
}

/// Prints or edits the persisted configuration, then exits.
/// Environment overrides are not applied so they never leak into the file.
async fn run_config_operation(args: Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_url) = args.new_api_url {
        config.api_base_url = new_url;
    }

    if let Some(new_key) = args.new_api_key {
        config.api_key = new_key;
    }

    if let Some(new_log_path) = args.new_log_file_path {
        config.log_file_path = Some(new_log_path);
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}
