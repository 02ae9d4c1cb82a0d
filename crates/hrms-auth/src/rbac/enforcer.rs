//! RBAC enforcement: turns policy denials into `Forbidden` errors.

use hrms_core::error::AppError;
use hrms_entity::employee::{Employee, EmployeeView, FieldSet};
use hrms_entity::user::Role;

use super::policies::{Action, RbacPolicies};

/// Message for a generic denial.
const NOT_ALLOWED: &str = "You are not allowed to perform this action";

/// Enforces role-based access control for directory operations.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Returns `Ok(())` if allowed, or a `Forbidden` error if denied.
    pub fn require(&self, role: Role, action: Action) -> Result<(), AppError> {
        if self.policies.can_perform(role, action) {
            return Ok(());
        }
        Err(match (role, action) {
            (Role::Hr, Action::CreateEmployee(_)) => AppError::forbidden(
                "HR users are only allowed to create Employees. You cannot create Admin or HR users.",
            ),
            _ => AppError::forbidden(NOT_ALLOWED),
        })
    }

    /// The employee fields visible to `role`.
    pub fn visible_fields(&self, role: Role) -> FieldSet {
        self.policies.visible_fields(role)
    }

    /// Project a loaded record for a caller with `role`.
    pub fn project(&self, role: Role, employee: Employee) -> EmployeeView {
        EmployeeView::project(employee, self.visible_fields(role))
    }
}
