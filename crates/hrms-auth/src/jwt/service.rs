//! Token issuance and validation behind one handle.

use chrono::{DateTime, Duration, Utc};

use hrms_core::config::AuthConfig;
use hrms_core::error::AppError;
use hrms_core::types::UserId;
use hrms_entity::user::Role;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;

/// Issues and validates access tokens.
///
/// Built once from configuration and shared; holds no mutable state.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Creates the service from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config),
        })
    }

    /// Issue a token for `user_id`, valid from `now` for the configured TTL.
    pub fn issue(&self, user_id: UserId, role: Role, now: DateTime<Utc>) -> Result<String, AppError> {
        self.encoder.encode(user_id, role, now)
    }

    /// Validate a token at `now`.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
        self.decoder.decode(token, now)
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.encoder.ttl()
    }
}
