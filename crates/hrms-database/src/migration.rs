//! Schema migrations, embedded from the workspace `migrations/` directory.

use tracing::info;

use hrms_core::error::{AppError, ErrorKind};

use crate::connection::DatabasePool;

/// Apply every pending migration.
pub async fn run_migrations(db: &DatabasePool) -> Result<(), AppError> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations applied");
    Ok(())
}
