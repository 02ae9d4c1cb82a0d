//! Application builder: wires state, router and middleware into an Axum
//! app and serves it.

use axum::Router;

use hrms_core::config::AppConfig;
use hrms_core::error::AppError;
use hrms_database::Database;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the HRMS server with the given configuration and store.
pub async fn run_server(config: AppConfig, db: Database) -> Result<(), AppError> {
    tracing::info!(provider = db.provider_name(), "Starting HRMS server...");

    let seed_enabled = config.seed.enabled;
    let addr = config.server.bind_address();
    let state = AppState::new(config, db.clone())?;

    if seed_enabled && state.seeder().seed_if_empty().await? {
        tracing::info!("Seeded default accounts and sample employees");
    }

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("HRMS server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("HRMS server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
