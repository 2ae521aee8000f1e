//! Password hashing with Argon2id
//!
//! Hashes are stored in the PHC string format, which carries the salt
//! and parameters alongside the digest.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{AppError, Result};

/// Hash a plaintext password with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// A malformed stored hash is treated as a verification failure rather
/// than an internal error, so a corrupted row cannot leak a 500 to the
/// login endpoint.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("hunter2").unwrap();
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_is_phc_format() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_malformed_stored_hash_fails_closed() {
        assert!(!verify_password("hunter2", "not-a-phc-string"));
        assert!(!verify_password("hunter2", ""));
    }
}
