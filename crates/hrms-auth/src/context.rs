//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hrms_core::types::UserId;
use hrms_entity::user::{Role, User};

/// Context for the current authenticated request.
///
/// Built by [`crate::RequestAuthenticator`] from the live user record and
/// passed into every service method so each operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's role as stored right now, not as embedded in the token.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `user` at `request_time`.
    pub fn for_user(user: &User, request_time: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
            name: user.name.clone(),
            email: user.email.clone(),
            request_time,
        }
    }
}
