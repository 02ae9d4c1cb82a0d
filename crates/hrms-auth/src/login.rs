//! Email/password login.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hrms_core::error::AppError;
use hrms_core::types::UserId;
use hrms_database::UserRepository;
use hrms_entity::user::Role;

use crate::jwt::TokenService;
use crate::password::PasswordHasher;

/// The one message for every failed login.
pub const BAD_CREDENTIALS: &str = "Incorrect email or password";

/// Token type reported to clients.
pub const TOKEN_TYPE: &str = "bearer";

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    /// Signed access token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Role of the account.
    pub role: Role,
    /// Display name of the account.
    pub name: String,
    /// Account id.
    pub user_id: UserId,
}

/// Verifies credentials and issues access tokens.
#[derive(Clone)]
pub struct LoginService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
    /// Verified against when the email is unknown, so both failure paths do
    /// the same hashing work.
    dummy_hash: String,
}

impl std::fmt::Debug for LoginService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginService").finish_non_exhaustive()
    }
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash_password("not-a-real-password")?;
        Ok(Self {
            users,
            hasher,
            tokens,
            dummy_hash,
        })
    }

    /// Authenticate by email and password.
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<LoginResult, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            let _ = self.hasher.verify_password(password, &self.dummy_hash);
            debug!("Login failed: unknown email");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash) {
            debug!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized(BAD_CREDENTIALS));
        }

        let access_token = self.tokens.issue(user.id, user.role, now)?;
        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResult {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            role: user.role,
            name: user.name,
            user_id: user.id,
        })
    }
}
