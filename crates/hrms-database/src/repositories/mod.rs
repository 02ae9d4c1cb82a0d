//! Repository traits and their PostgreSQL implementations.
//!
//! Services only ever see `Arc<dyn UserRepository>` and
//! `Arc<dyn EmployeeRepository>`. Which store sits behind them is decided
//! once at startup by [`crate::provider::Database`].

pub mod employee;
pub mod user;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::traits::Repository;
use hrms_core::types::{EmployeeId, PageRequest, UserId};
use hrms_entity::employee::{CreateEmployee, Employee, EmployeeFilter, UpdateEmployee};
use hrms_entity::user::{CreateUser, User};

pub use employee::PgEmployeeRepository;
pub use user::PgUserRepository;

/// Name of the unique constraint on `users.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Message returned when an email is already registered.
pub const EMAIL_TAKEN: &str = "Email already registered";

/// Credential store.
#[async_trait]
pub trait UserRepository: Repository<User, UserId> {
    /// Find a user by email. The match is exact.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. A duplicate email yields `Conflict`.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
}

/// Employee directory store.
#[async_trait]
pub trait EmployeeRepository: Repository<Employee, EmployeeId> {
    /// Return one page of matching records, ordered by ascending id, and the
    /// number of records matching `filter` before pagination.
    ///
    /// Both values come from the same consistent view of the store.
    async fn list(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<(Vec<Employee>, u64)>;

    /// Insert a directory record on its own.
    async fn create(&self, data: &CreateEmployee) -> AppResult<Employee>;

    /// Insert a user account and a directory record atomically.
    ///
    /// If either insert fails neither row is kept.
    async fn create_with_account(
        &self,
        account: &CreateUser,
        data: &CreateEmployee,
    ) -> AppResult<(User, Employee)>;

    /// Insert every account and every directory record as one unit.
    ///
    /// On any failure nothing from the batch is kept.
    async fn create_batch(
        &self,
        accounts: &[CreateUser],
        records: &[CreateEmployee],
    ) -> AppResult<()>;

    /// Apply a partial update. Returns `None` if the id does not exist.
    async fn update(
        &self,
        id: EmployeeId,
        changes: &UpdateEmployee,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Employee>>;
}

/// Build a mapper from `sqlx::Error` to [`AppError`].
///
/// A violation of the email unique constraint becomes `Conflict`; anything
/// else is a `Database` error carrying `context`.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        if let sqlx::Error::Database(db) = &e {
            if db.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
                return AppError::conflict(EMAIL_TAKEN);
            }
        }
        AppError::with_source(ErrorKind::Database, context, e)
    }
}
