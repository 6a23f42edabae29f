//! Shared utilities used across the service layer.
//!
//! Contains code generation, password digest, and timestamp helpers.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use chrono::Utc;
use nanoid::nanoid;

use crate::constants::CODE_ALPHABET;
use crate::errors::AppError;

/// Generate a random alphanumeric code.
///
/// One generator serves both user ids and short codes; it only needs a low
/// collision rate at this table size, not cryptographic strength.
pub fn generate_code(length: usize) -> String {
    nanoid!(length, &CODE_ALPHABET)
}

/// Hash a plaintext password into an argon2 digest
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("failed to hash password: {}", e)))
}

/// Verify a plaintext password against a stored digest
pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(digest)
        .map_err(|e| AppError::internal(format!("stored password digest is malformed: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Current UTC time in the store's timestamp format
pub fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
