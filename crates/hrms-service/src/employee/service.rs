//! Employee directory service: role-gated CRUD with projection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use hrms_auth::context::RequestContext;
use hrms_auth::password::{PasswordHasher, PasswordValidator};
use hrms_auth::rbac::{Action, RbacEnforcer};
use hrms_core::error::AppError;
use hrms_core::traits::Repository;
use hrms_core::types::{EmployeeId, Page, PageRequest};
use hrms_database::EmployeeRepository;
use hrms_entity::employee::{
    CreateEmployee, Employee, EmployeeFilter, EmployeeView, UpdateEmployee,
};
use hrms_entity::user::{CreateUser, Role};

use super::validation::{require_email, require_salary, require_text, validate_update};

/// Request to create an employee together with its login account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Role of the new account.
    #[serde(default)]
    pub role: Role,
    pub department: String,
    pub job_role: String,
    pub salary: f64,
}

/// Handles employee directory operations.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    rbac: Arc<RbacEnforcer>,
}

impl std::fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService")
            .field("rbac", &self.rbac)
            .finish_non_exhaustive()
    }
}

fn not_found(id: EmployeeId) -> AppError {
    AppError::not_found(format!("Employee with id {id} not found"))
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            employees,
            hasher,
            validator,
            rbac,
        }
    }

    /// Lists employees matching `filter`, projected for the caller's role.
    ///
    /// A page past the end is an empty, successful result.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: EmployeeFilter,
        page: PageRequest,
    ) -> Result<Page<EmployeeView>, AppError> {
        self.rbac.require(ctx.role, Action::ReadEmployee)?;

        let filter = filter.normalized();
        let (items, total) = self.employees.list(&filter, page).await?;
        let fields = self.rbac.visible_fields(ctx.role);

        Ok(Page::new(items, page, total).map(|e| EmployeeView::project(e, fields)))
    }

    /// Gets a single employee, projected for the caller's role.
    pub async fn get_by_id(
        &self,
        ctx: &RequestContext,
        id: EmployeeId,
    ) -> Result<EmployeeView, AppError> {
        self.rbac.require(ctx.role, Action::ReadEmployee)?;

        let employee = self
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(self.rbac.project(ctx.role, employee))
    }

    /// Creates an employee and its login account in one transaction.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        self.rbac.require(ctx.role, Action::CreateEmployee(req.role))?;

        require_text("name", &req.name)?;
        require_email(&req.email)?;
        require_text("department", &req.department)?;
        require_text("job_role", &req.job_role)?;
        require_salary(req.salary)?;
        self.validator.validate(&req.password)?;

        let password_hash = self.hasher.hash_password(&req.password)?;
        let account = CreateUser {
            name: req.name.clone(),
            email: req.email,
            password_hash,
            role: req.role,
        };
        let record = CreateEmployee {
            name: req.name,
            department: req.department,
            job_role: req.job_role,
            salary: req.salary,
        };

        let (user, employee) = self
            .employees
            .create_with_account(&account, &record)
            .await?;

        info!(
            employee_id = %employee.id,
            user_id = %user.id,
            role = %user.role,
            acting_user = %ctx.user_id,
            "Employee created"
        );
        Ok(employee)
    }

    /// Applies a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: EmployeeId,
        changes: UpdateEmployee,
    ) -> Result<Employee, AppError> {
        self.rbac.require(ctx.role, Action::UpdateEmployee)?;
        validate_update(&changes)?;

        let employee = self
            .employees
            .update(id, &changes, ctx.request_time)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(employee_id = %id, acting_user = %ctx.user_id, "Employee updated");
        Ok(employee)
    }

    /// Deletes an employee. Returns `false` if the id did not exist.
    pub async fn delete(&self, ctx: &RequestContext, id: EmployeeId) -> Result<bool, AppError> {
        self.rbac.require(ctx.role, Action::DeleteEmployee)?;

        let deleted = self.employees.delete(id).await?;
        if deleted {
            info!(employee_id = %id, acting_user = %ctx.user_id, "Employee deleted");
        }
        Ok(deleted)
    }
}
