//! Bearer-token request authentication.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use hrms_core::error::AppError;
use hrms_core::traits::Repository;
use hrms_database::UserRepository;

use crate::context::RequestContext;
use crate::jwt::{INVALID_TOKEN, TokenService};

/// Authentication scheme expected in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively. Returns `None` for any other
/// scheme or an empty token.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Resolves a bearer token to the identity acting on a request.
#[derive(Clone)]
pub struct RequestAuthenticator {
    tokens: Arc<TokenService>,
    users: Arc<dyn UserRepository>,
}

impl std::fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestAuthenticator")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl RequestAuthenticator {
    /// Creates a new authenticator.
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn UserRepository>) -> Self {
        Self { tokens, users }
    }

    /// Authenticate a raw `Authorization` header value.
    pub async fn authenticate_header(
        &self,
        header: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<RequestContext, AppError> {
        let token = header
            .and_then(bearer_token)
            .ok_or_else(|| AppError::unauthorized(INVALID_TOKEN))?;
        self.authenticate(token, now).await
    }

    /// Validate `token` and load the user it names.
    ///
    /// The role in the returned context comes from the stored user, so a
    /// role change or a deleted account takes effect on the next request.
    pub async fn authenticate(&self, token: &str, now: DateTime<Utc>) -> Result<RequestContext, AppError> {
        let claims = self.tokens.validate(token, now)?;

        let Some(user) = self.users.find_by_id(claims.user_id).await? else {
            debug!(user_id = %claims.user_id, "Token names a user that no longer exists");
            return Err(AppError::unauthorized(INVALID_TOKEN));
        };

        if user.role != claims.role {
            debug!(
                user_id = %user.id,
                token_role = %claims.role,
                current_role = %user.role,
                "Role changed since token issuance, using current role"
            );
        }

        Ok(RequestContext::for_user(&user, now))
    }
}
