//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use hrms_core::error::AppError;
use hrms_core::types::PageRequest;
use hrms_entity::employee::{EmployeeFilter, UpdateEmployee};
use hrms_entity::user::Role;
use hrms_service::CreateEmployeeRequest;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Body of `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeBody {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
    /// Role of the new account, `employee` when omitted.
    pub role: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub department: String,
    #[validate(length(min = 1, message = "is required"))]
    pub job_role: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub salary: f64,
}

impl TryFrom<CreateEmployeeBody> for CreateEmployeeRequest {
    type Error = AppError;

    fn try_from(body: CreateEmployeeBody) -> Result<Self, Self::Error> {
        let role = match body.role.as_deref() {
            Some(role) => role.parse::<Role>()?,
            None => Role::default(),
        };
        Ok(Self {
            name: body.name,
            email: body.email,
            password: body.password,
            role,
            department: body.department,
            job_role: body.job_role,
            salary: body.salary,
        })
    }
}

/// Body of `PUT /employees/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeBody {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub department: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub job_role: Option<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub salary: Option<f64>,
}

impl From<UpdateEmployeeBody> for UpdateEmployee {
    fn from(body: UpdateEmployeeBody) -> Self {
        Self {
            name: body.name,
            department: body.department,
            job_role: body.job_role,
            salary: body.salary,
        }
    }
}

/// Query string of `GET /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEmployeesQuery {
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    /// Exact department.
    pub department: Option<String>,
    /// Exact job role.
    pub job_role: Option<String>,
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 10, max: 100).
    pub limit: Option<u64>,
}

impl ListEmployeesQuery {
    /// Split into the filter and a validated page request.
    pub fn into_parts(self) -> Result<(EmployeeFilter, PageRequest), AppError> {
        let page = PageRequest::from_params(self.page, self.limit)?;
        let filter = EmployeeFilter {
            search: self.search,
            department: self.department,
            job_role: self.job_role,
        };
        Ok((filter, page))
    }
}
