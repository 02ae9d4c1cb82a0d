//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// The set is closed. Anything that is not one of these three strings is
/// rejected at the boundary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, may create accounts of any role.
    Admin,
    /// Manages the directory, may create `employee` accounts only.
    Hr,
    /// Read-only access without salaries.
    #[default]
    Employee,
}

impl Role {
    /// All roles, in descending privilege order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Hr, Role::Employee];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Hr => "hr",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = hrms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "hr" => Ok(Self::Hr),
            "employee" => Ok(Self::Employee),
            _ => Err(hrms_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, hr, employee"
            ))),
        }
    }
}
