//! PostgreSQL employee repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::traits::Repository;
use hrms_core::types::{EmployeeId, PageRequest};
use hrms_entity::employee::{CreateEmployee, Employee, EmployeeFilter, UpdateEmployee};
use hrms_entity::user::{CreateUser, User};

use super::user::insert_user;
use super::{EmployeeRepository, db_error};
use crate::connection::DatabasePool;

/// Repository for the employee directory.
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    db: DatabasePool,
}

impl PgEmployeeRepository {
    /// Create a new employee repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}

/// Escape `%`, `_` and `\` so a search term is matched literally.
///
/// Backslash is the default `LIKE` escape character in PostgreSQL.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// The `OFFSET` for `page`, or `None` when it lies beyond what Postgres
/// accepts. Such a page is necessarily past the end of the table.
fn sql_offset(page: PageRequest) -> Option<i64> {
    i64::try_from(page.offset()).ok()
}

/// Append the `WHERE` clause for `filter`.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &EmployeeFilter) {
    let mut separator = " WHERE ";
    if let Some(search) = &filter.search {
        builder
            .push(separator)
            .push("name ILIKE ")
            .push_bind(format!("%{}%", escape_like(search)));
        separator = " AND ";
    }
    if let Some(department) = &filter.department {
        builder
            .push(separator)
            .push("department = ")
            .push_bind(department.clone());
        separator = " AND ";
    }
    if let Some(job_role) = &filter.job_role {
        builder
            .push(separator)
            .push("job_role = ")
            .push_bind(job_role.clone());
    }
}

async fn insert_employee<'e>(
    executor: impl PgExecutor<'e>,
    data: &CreateEmployee,
) -> AppResult<Employee> {
    sqlx::query_as::<_, Employee>(
        r#"INSERT INTO employees (name, department, job_role, salary)
           VALUES ($1, $2, $3, $4)
           RETURNING *"#,
    )
    .bind(&data.name)
    .bind(&data.department)
    .bind(&data.job_role)
    .bind(data.salary)
    .fetch_one(executor)
    .await
    .map_err(db_error("Failed to create employee"))
}

#[async_trait]
impl Repository<Employee, EmployeeId> for PgEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employee by id", e)
            })
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count employees", e)
            })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<(Vec<Employee>, u64)> {
        let mut tx = self.db.snapshot().await?;

        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM employees");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count employees", e)
            })?;

        let employees = match sql_offset(page) {
            Some(offset) => {
                let mut list_query = QueryBuilder::<Postgres>::new("SELECT * FROM employees");
                push_filters(&mut list_query, filter);
                list_query
                    .push(" ORDER BY id ASC LIMIT ")
                    .push_bind(page.limit as i64)
                    .push(" OFFSET ")
                    .push_bind(offset);
                list_query
                    .build_query_as::<Employee>()
                    .fetch_all(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to list employees", e)
                    })?
            }
            None => Vec::new(),
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to finish list transaction", e)
        })?;

        debug!(total, returned = employees.len(), "Listed employees");
        Ok((employees, total as u64))
    }

    async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        insert_employee(self.pool(), data).await
    }

    async fn create_with_account(
        &self,
        account: &CreateUser,
        data: &CreateEmployee,
    ) -> AppResult<(User, Employee)> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        let user = insert_user(&mut *tx, account).await?;
        let employee = insert_employee(&mut *tx, data).await?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit employee creation"))?;
        Ok((user, employee))
    }

    async fn create_batch(
        &self,
        accounts: &[CreateUser],
        records: &[CreateEmployee],
    ) -> AppResult<()> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        for account in accounts {
            insert_user(&mut *tx, account).await?;
        }
        for record in records {
            insert_employee(&mut *tx, record).await?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit batch insert"))?;
        Ok(())
    }

    async fn update(
        &self,
        id: EmployeeId,
        changes: &UpdateEmployee,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            r#"UPDATE employees SET
                   name = COALESCE($2, name),
                   department = COALESCE($3, department),
                   job_role = COALESCE($4, job_role),
                   salary = COALESCE($5, salary),
                   updated_at = $6
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.department.as_deref())
        .bind(changes.job_role.as_deref())
        .bind(changes.salary)
        .bind(now)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update employee", e))
    }
}
