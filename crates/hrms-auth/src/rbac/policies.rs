//! Role-to-action policy table and field visibility.

use std::fmt;

use hrms_entity::employee::{EmployeeField, FieldSet};
use hrms_entity::user::Role;

/// An operation on the employee directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// List or fetch employees.
    ReadEmployee,
    /// Change an employee record.
    UpdateEmployee,
    /// Remove an employee record.
    DeleteEmployee,
    /// Create an employee together with an account of the given role.
    CreateEmployee(Role),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadEmployee => write!(f, "read employees"),
            Self::UpdateEmployee => write!(f, "update employees"),
            Self::DeleteEmployee => write!(f, "delete employees"),
            Self::CreateEmployee(role) => write!(f, "create {role} accounts"),
        }
    }
}

/// The static policy table.
///
/// | role     | read | update | delete | create employee | create hr | create admin |
/// |----------|------|--------|--------|-----------------|-----------|--------------|
/// | admin    | yes  | yes    | yes    | yes             | yes       | yes          |
/// | hr       | yes  | yes    | yes    | yes             | no        | no           |
/// | employee | yes  | no     | no     | no              | no        | no           |
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacPolicies;

impl RbacPolicies {
    /// Creates the policy table.
    pub fn new() -> Self {
        Self
    }

    /// Whether `role` may perform `action`.
    pub fn can_perform(&self, role: Role, action: Action) -> bool {
        match (role, action) {
            (Role::Admin, _) => true,
            (Role::Hr, Action::ReadEmployee | Action::UpdateEmployee | Action::DeleteEmployee) => {
                true
            }
            (Role::Hr, Action::CreateEmployee(target)) => match target {
                Role::Employee => true,
                Role::Hr | Role::Admin => false,
            },
            (Role::Employee, Action::ReadEmployee) => true,
            (
                Role::Employee,
                Action::UpdateEmployee | Action::DeleteEmployee | Action::CreateEmployee(_),
            ) => false,
        }
    }

    /// The employee fields `role` is allowed to see.
    pub fn visible_fields(&self, role: Role) -> FieldSet {
        match role {
            Role::Admin | Role::Hr => FieldSet::all(),
            Role::Employee => FieldSet::all().without(EmployeeField::Salary),
        }
    }
}
