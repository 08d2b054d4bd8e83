// SPDX-License-Identifier: MIT

//! Password hashing and verification.
//!
//! Argon2id with a random per-password salt, stored as a PHC string.
//! Hashing is deliberately slow; the cost factor bounds how long a
//! login request can block.

use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

use crate::error::AppError;

/// Hash a password with Argon2id and a fresh random salt.
///
/// Returns the PHC string (algorithm, parameters, salt and hash) suitable
/// for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash.
///
/// Returns false on mismatch and on malformed hashes; verification never
/// fails open.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    // Argon2 compares in constant time internally
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
