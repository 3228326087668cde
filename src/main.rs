mod config;
mod familywish_errors;
mod handler;
mod orm;
mod secret_santa;
mod sharedstate;
mod utils;

use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::familywish_errors::FWErr;
use crate::sharedstate::SharedState;

async fn serve() -> Result<(), FWErr> {
    let config = AppConfig::from_env()?;
    let shared_state = Arc::new(SharedState::new(&config).await?);

    let addr = format!("{}:{}", config.http.host, config.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| FWErr::ConfigError(format!("Failed to bind {}: {}", addr, err)))?;
    info!(target: "http", "FamilyWish listening on http://{}", addr);

    axum::serve(listener, handler::router(shared_state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!(target: "http", "Shutting down");
        })
        .await
        .map_err(|err| FWErr::ConfigError(format!("Server error: {}", err)))
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    dotenv::dotenv().ok();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("FAMILYWISH_LOG"))
        .init();

    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "args", "{}", err);
            ExitCode::FAILURE
        }
    }
}
