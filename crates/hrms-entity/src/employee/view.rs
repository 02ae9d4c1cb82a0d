//! Role-conditional projections of an [`Employee`].
//!
//! The full record is always loaded. Only the outward shape differs: a
//! [`RestrictedEmployee`] has no salary field at all, so it cannot be
//! serialized by accident.

use chrono::{DateTime, Utc};
use hrms_core::types::EmployeeId;
use serde::{Deserialize, Serialize};

use super::model::Employee;

/// A single outward-facing employee field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Id,
    Name,
    Department,
    JobRole,
    Salary,
    CreatedAt,
    UpdatedAt,
}

impl EmployeeField {
    /// Every employee field.
    pub const ALL: [EmployeeField; 7] = [
        Self::Id,
        Self::Name,
        Self::Department,
        Self::JobRole,
        Self::Salary,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of employee fields a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet(u8);

impl FieldSet {
    /// The set of every field.
    pub fn all() -> Self {
        Self(
            EmployeeField::ALL
                .iter()
                .fold(0, |bits, field| bits | field.bit()),
        )
    }

    /// This set minus `field`.
    pub fn without(self, field: EmployeeField) -> Self {
        Self(self.0 & !field.bit())
    }

    /// Check membership.
    pub fn contains(&self, field: EmployeeField) -> bool {
        self.0 & field.bit() != 0
    }
}

/// Employee record without compensation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictedEmployee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub job_role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for RestrictedEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            department: employee.department,
            job_role: employee.job_role,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// An employee as returned to a particular caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeView {
    /// Every field, salary included.
    Full(Employee),
    /// Everything except salary.
    Restricted(RestrictedEmployee),
}

impl EmployeeView {
    /// Project `employee` down to `fields`.
    pub fn project(employee: Employee, fields: FieldSet) -> Self {
        if fields.contains(EmployeeField::Salary) {
            Self::Full(employee)
        } else {
            Self::Restricted(employee.into())
        }
    }

    /// The salary, if this projection carries it.
    pub fn salary(&self) -> Option<f64> {
        match self {
            Self::Full(e) => Some(e.salary),
            Self::Restricted(_) => None,
        }
    }
}
