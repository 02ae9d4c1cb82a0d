//! Employee entity model.

use chrono::{DateTime, Utc};
use hrms_core::types::EmployeeId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee directory record.
///
/// Employee rows are independent of user accounts: there is no foreign key
/// and the two are never joined at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Department (free text, matched exactly when filtering).
    pub department: String,
    /// Job title (free text, matched exactly when filtering).
    pub job_role: String,
    /// Annual salary. Non-negative and finite.
    pub salary: f64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub department: String,
    pub job_role: String,
    pub salary: f64,
}

/// A partial update. Only the fields that are `Some` change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub department: Option<String>,
    pub job_role: Option<String>,
    pub salary: Option<f64>,
}

impl UpdateEmployee {
    /// Apply the present fields to `employee` and refresh `updated_at`.
    pub fn apply_to(&self, employee: &mut Employee, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(department) = &self.department {
            employee.department = department.clone();
        }
        if let Some(job_role) = &self.job_role {
            employee.job_role = job_role.clone();
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        employee.updated_at = now;
    }
}

/// Conjunctive filter over the directory.
///
/// `search` is a case-insensitive substring match on the name only.
/// `department` and `job_role` are exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub job_role: Option<String>,
}

impl EmployeeFilter {
    /// Drop empty strings so that `?department=` imposes no constraint.
    pub fn normalized(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }
        Self {
            search: non_empty(self.search),
            department: non_empty(self.department),
            job_role: non_empty(self.job_role),
        }
    }

    /// Evaluate the filter against a record in memory.
    pub fn matches(&self, employee: &Employee) -> bool {
        let search_ok = self.search.as_ref().is_none_or(|search| {
            employee
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
        });
        let department_ok = self
            .department
            .as_ref()
            .is_none_or(|department| employee.department == *department);
        let job_role_ok = self
            .job_role
            .as_ref()
            .is_none_or(|job_role| employee.job_role == *job_role);
        search_ok && department_ok && job_role_ok
    }
}
