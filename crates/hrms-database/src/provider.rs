//! Store selection: wires the configured provider into repository handles.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use hrms_core::config::DatabaseConfig;
use hrms_core::error::AppError;
use hrms_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    EmployeeRepository, PgEmployeeRepository, PgUserRepository, UserRepository,
};

/// The repositories the rest of the application runs against.
///
/// The backing provider is selected at construction time based on
/// configuration.
#[derive(Clone)]
pub struct Database {
    users: Arc<dyn UserRepository>,
    employees: Arc<dyn EmployeeRepository>,
    pool: Option<DatabasePool>,
}

impl Database {
    /// Connect to the provider named in `config.provider`.
    ///
    /// For `postgres` this opens the pool and, when `run_migrations` is set,
    /// applies pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(&pool).await?;
                }
                Ok(Self::postgres(pool))
            }
            "memory" => {
                info!("Initializing in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: memory, postgres"
            ))),
        }
    }

    /// Repositories backed by an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.pool().clone())),
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Repositories backed by an in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.users()),
            employees: Arc::new(store.employees()),
            pool: None,
        }
    }

    /// The credential store.
    pub fn users(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.users)
    }

    /// The employee directory store.
    pub fn employees(&self) -> Arc<dyn EmployeeRepository> {
        Arc::clone(&self.employees)
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &'static str {
        if self.pool.is_some() { "postgres" } else { "memory" }
    }

    /// Release pooled connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("provider", &self.provider_name())
            .finish_non_exhaustive()
    }
}
