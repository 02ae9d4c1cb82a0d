//! HRMS Server: role-based employee management API.
//!
//! Main entry point that loads configuration, initializes logging, opens the
//! configured store and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use hrms_core::config::AppConfig;
use hrms_core::error::AppError;
use hrms_database::Database;

#[tokio::main]
async fn main() {
    let env = std::env::var("HRMS_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting HRMS v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.uses_default_secret() {
        tracing::warn!("Using the default JWT secret; set HRMS_AUTH__JWT_SECRET in production");
    }

    tracing::info!(provider = %config.database.provider, "Opening data store...");
    let db = Database::connect(&config.database).await?;

    hrms_api::run_server(config, db).await
}
