//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hrms_auth::jwt::TokenService;
use hrms_auth::password::{PasswordHasher, PasswordValidator};
use hrms_auth::rbac::RbacEnforcer;
use hrms_auth::{LoginService, RequestAuthenticator};
use hrms_core::config::AppConfig;
use hrms_core::error::AppError;
use hrms_database::Database;
use hrms_service::{EmployeeService, Seeder};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Repository handles for the configured store
    pub db: Database,

    // ── Auth ─────────────────────────────────────────────────
    /// Password hasher (Argon2id)
    pub password_hasher: Arc<PasswordHasher>,
    /// Access token issuance and validation
    pub token_service: Arc<TokenService>,
    /// Bearer token to request context
    pub authenticator: Arc<RequestAuthenticator>,
    /// Email/password login
    pub login_service: Arc<LoginService>,

    // ── Services ─────────────────────────────────────────────
    /// Employee directory service
    pub employee_service: Arc<EmployeeService>,
}

impl AppState {
    /// Wire every service from configuration and an open store.
    pub fn new(config: AppConfig, db: Database) -> Result<Self, AppError> {
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let token_service = Arc::new(TokenService::new(&config.auth)?);
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        let authenticator = Arc::new(RequestAuthenticator::new(
            Arc::clone(&token_service),
            db.users(),
        ));
        let login_service = Arc::new(LoginService::new(
            db.users(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_service),
        )?);
        let employee_service = Arc::new(EmployeeService::new(
            db.employees(),
            Arc::clone(&password_hasher),
            password_validator,
            rbac_enforcer,
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            password_hasher,
            token_service,
            authenticator,
            login_service,
            employee_service,
        })
    }

    /// A seeder bound to this state's store and hasher.
    pub fn seeder(&self) -> Seeder {
        Seeder::new(
            self.db.users(),
            self.db.employees(),
            Arc::clone(&self.password_hasher),
        )
    }
}
