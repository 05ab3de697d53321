// File: crates/services/gymbook_backend/src/main.rs
use gymbook_backend::{build_app, AppState};
use gymbook_common::{logging, Context, GymbookError};
use gymbook_config::load_config;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

async fn run() -> Result<(), GymbookError> {
    let config = load_config().map_err(|e| GymbookError::ConfigError(e.to_string()))?;
    let config = Arc::new(config);
    let _log_guard = logging::init_with_config(&config.logging);

    let state = logging::log_result(
        AppState::open(config.clone()).await,
        "Data store ready",
        "Failed to open data store",
    )?;
    let app = build_app(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("gymbook: {}", e);
            ExitCode::FAILURE
        }
    }
}
