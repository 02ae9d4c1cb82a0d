//! JWT token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use hrms_core::config::AuthConfig;
use hrms_core::error::AppError;

use super::INVALID_TOKEN;
use super::claims::Claims;

/// Verifies signature and expiry of access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `decode`, not the
        // library's, and with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes `token` and checks it is still live at `now`.
    ///
    /// Every failure maps to the same `Unauthorized` error. The actual cause
    /// is only logged.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Rejected access token");
                AppError::unauthorized(INVALID_TOKEN)
            })?
            .claims;

        if claims.is_expired_at(now) {
            debug!(user_id = %claims.user_id, exp = claims.exp, "Rejected expired access token");
            return Err(AppError::unauthorized(INVALID_TOKEN));
        }

        Ok(claims)
    }
}
