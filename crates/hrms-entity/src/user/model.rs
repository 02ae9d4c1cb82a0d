//! User entity model.

use chrono::{DateTime, Utc};
use hrms_core::types::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::Role;

/// A login account. Holds credentials and the role used for every
/// authorization decision.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email. Unique and matched exactly.
    pub email: String,
    /// Stored password form (`<salt>$<digest>`).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role (RBAC).
    pub role: Role,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
}
