//! Password policy for newly created accounts.

use hrms_core::config::AuthConfig;
use hrms_core::error::AppError;

/// Upper bound on password length, in bytes.
pub const MAX_PASSWORD_BYTES: usize = 1024;

/// Validates passwords supplied when an account is created.
///
/// Login does not go through this; a stored account must always be able to
/// sign in with the password it was created with.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Returns the first policy violation, if any.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::validation(format!(
                "Password must be at most {MAX_PASSWORD_BYTES} bytes long"
            )));
        }
        Ok(())
    }
}
