//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` trait from `maxai-core`. Hashes are PHC
//! strings (`$argon2id$v=19$...`) carrying their own salt and parameters,
//! so verification needs nothing but the stored string.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use maxai_core::service::hash::PasswordHasher;
use maxai_types::error::AccountError;

use super::rand_bytes;

/// Argon2id with the crate's default parameters.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        let salt = SaltString::encode_b64(&rand_bytes()[..16]).map_err(|e| {
            tracing::error!("salt encoding failed: {e}");
            AccountError::Hashing
        })?;

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("password hashing failed: {e}");
                AccountError::Hashing
            })
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            tracing::warn!("stored password hash is not a valid PHC string");
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash_password("experiment626").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("experiment626", &hash));
        assert!(!hasher.verify_password("experiment625", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2PasswordHasher::new();
        let a = hasher.hash_password("same password").unwrap();
        let b = hasher.hash_password("same password").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify_password("same password", &a));
        assert!(hasher.verify_password("same password", &b));
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify_password("anything", "not-a-phc-string"));
        assert!(!hasher.verify_password("anything", ""));
    }
}
