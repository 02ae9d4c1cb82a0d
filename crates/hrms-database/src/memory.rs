//! In-memory store for tests and single-process runs without PostgreSQL.
//!
//! Both tables live behind one Tokio `RwLock`, so a dual insert happens
//! under a single write guard and a list reads rows and total under a
//! single read guard.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use hrms_core::error::AppError;
use hrms_core::result::AppResult;
use hrms_core::traits::Repository;
use hrms_core::types::{EmployeeId, PageRequest, UserId};
use hrms_entity::employee::{CreateEmployee, Employee, EmployeeFilter, UpdateEmployee};
use hrms_entity::user::{CreateUser, User};

use crate::repositories::{EMAIL_TAKEN, EmployeeRepository, UserRepository};

#[derive(Debug, Clone, Default)]
struct InnerState {
    users: BTreeMap<UserId, User>,
    employees: BTreeMap<EmployeeId, Employee>,
    next_user_id: i64,
    next_employee_id: i64,
}

impl InnerState {
    fn insert_user(&mut self, data: &CreateUser, now: DateTime<Utc>) -> AppResult<User> {
        if self.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }
        self.next_user_id += 1;
        let user = User {
            id: UserId::new(self.next_user_id),
            name: data.name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn insert_employee(&mut self, data: &CreateEmployee, now: DateTime<Utc>) -> AppResult<Employee> {
        // Mirrors the CHECK constraint on the employees table.
        if !(data.salary.is_finite() && data.salary >= 0.0) {
            return Err(AppError::validation("salary must be a non-negative number"));
        }
        self.next_employee_id += 1;
        let employee = Employee {
            id: EmployeeId::new(self.next_employee_id),
            name: data.name.clone(),
            department: data.department.clone(),
            job_role: data.job_role.clone(),
            salary: data.salary,
            created_at: now,
            updated_at: now,
        };
        self.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }
}

/// Shared in-memory backing store.
///
/// Hand out [`MemoryStore::users`] and [`MemoryStore::employees`] as the two
/// repositories; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The user repository view of this store.
    pub fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository {
            store: self.clone(),
        }
    }

    /// The employee repository view of this store.
    pub fn employees(&self) -> MemoryEmployeeRepository {
        MemoryEmployeeRepository {
            store: self.clone(),
        }
    }
}

/// [`UserRepository`] over a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

/// [`EmployeeRepository`] over a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryEmployeeRepository {
    store: MemoryStore,
}

#[async_trait]
impl Repository<User, UserId> for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.store.state.read().await.users.get(&id).cloned())
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        Ok(self.store.state.write().await.users.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.store.state.read().await.users.len() as u64)
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.store.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        self.store.state.write().await.insert_user(data, Utc::now())
    }
}

#[async_trait]
impl Repository<Employee, EmployeeId> for MemoryEmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.store.state.read().await.employees.get(&id).cloned())
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<bool> {
        Ok(self.store.state.write().await.employees.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.store.state.read().await.employees.len() as u64)
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn list(
        &self,
        filter: &EmployeeFilter,
        page: PageRequest,
    ) -> AppResult<(Vec<Employee>, u64)> {
        let state = self.store.state.read().await;
        // BTreeMap iteration is already in ascending id order.
        let matching: Vec<&Employee> = state
            .employees
            .values()
            .filter(|e| filter.matches(e))
            .collect();
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit as usize)
            .cloned()
            .collect();
        Ok((items, total))
    }

    async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        self.store
            .state
            .write()
            .await
            .insert_employee(data, Utc::now())
    }

    async fn create_with_account(
        &self,
        account: &CreateUser,
        data: &CreateEmployee,
    ) -> AppResult<(User, Employee)> {
        let mut state = self.store.state.write().await;
        let now = Utc::now();
        let user = state.insert_user(account, now)?;
        match state.insert_employee(data, now) {
            Ok(employee) => Ok((user, employee)),
            Err(e) => {
                state.users.remove(&user.id);
                Err(e)
            }
        }
    }

    async fn create_batch(
        &self,
        accounts: &[CreateUser],
        records: &[CreateEmployee],
    ) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        let before = state.clone();
        let now = Utc::now();
        let result = accounts
            .iter()
            .try_for_each(|account| state.insert_user(account, now).map(drop))
            .and_then(|()| {
                records
                    .iter()
                    .try_for_each(|record| state.insert_employee(record, now).map(drop))
            });
        if result.is_err() {
            *state = before;
        }
        result
    }

    async fn update(
        &self,
        id: EmployeeId,
        changes: &UpdateEmployee,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Employee>> {
        let mut state = self.store.state.write().await;
        Ok(state.employees.get_mut(&id).map(|employee| {
            changes.apply_to(employee, now);
            employee.clone()
        }))
    }
}
