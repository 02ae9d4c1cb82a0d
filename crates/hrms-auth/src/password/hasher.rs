//! Salted Argon2id password hashing and verification.
//!
//! The stored form is `<hex salt>$<hex digest>`. `$` is outside the hex
//! alphabet, so the split is unambiguous. Cost parameters are not stored,
//! which means they must stay stable for the lifetime of a deployment.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use argon2::{Algorithm, Argon2, Params, Version};

use hrms_core::config::AuthConfig;
use hrms_core::error::AppError;

/// Salt length in bytes.
const SALT_LEN: usize = 16;
/// Shortest salt Argon2 accepts.
const MIN_SALT_LEN: usize = 8;
/// Digest length in bytes.
const DIGEST_LEN: usize = 32;
/// Separator between salt and digest.
const SEPARATOR: char = '$';

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the cost parameters from `[auth]`.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            Some(DIGEST_LEN),
        )
        .map_err(|e| AppError::configuration(format!("Invalid password hash parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn digest(&self, password: &str, salt: &[u8]) -> Result<[u8; DIGEST_LEN], AppError> {
        let mut out = [0u8; DIGEST_LEN];
        self.argon2()
            .hash_password_into(password.as_bytes(), salt, &mut out)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        Ok(out)
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let digest = self.digest(password, &salt)?;
        Ok(format!(
            "{}{SEPARATOR}{}",
            hex::encode(salt),
            hex::encode(digest)
        ))
    }

    /// Verifies a plaintext password against a stored form.
    ///
    /// Any malformed stored form simply fails verification.
    pub fn verify_password(&self, password: &str, stored: &str) -> bool {
        let Some((salt, digest)) = split_stored(stored) else {
            return false;
        };
        match self.digest(password, &salt) {
            Ok(computed) => constant_time_eq(&computed, &digest),
            Err(_) => false,
        }
    }
}

/// Split and decode `<salt>$<digest>`. Exactly one separator is allowed.
fn split_stored(stored: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let mut parts = stored.split(SEPARATOR);
    let (salt, digest) = (parts.next()?, parts.next()?);
    if parts.next().is_some() || salt.is_empty() || digest.is_empty() {
        return None;
    }
    let salt = hex::decode(salt).ok()?;
    let digest = hex::decode(digest).ok()?;
    if salt.len() < MIN_SALT_LEN || digest.len() != DIGEST_LEN {
        return None;
    }
    Some((salt, digest))
}

/// Compare two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
