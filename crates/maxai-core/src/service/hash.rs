//! Hashing ports for account credentials.
//!
//! Defined in maxai-core so the account service can hash passwords and
//! session tokens without coupling to a specific algorithm. The argon2 and
//! SHA-256 adapters live in maxai-infra.

use maxai_types::error::AccountError;

/// One-way password hashing with salted, self-describing output.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a PHC string.
    fn hash_password(&self, password: &str) -> Result<String, AccountError>;

    /// Check a plaintext password against a stored hash. A malformed hash
    /// verifies as `false`.
    fn verify_password(&self, password: &str, hash: &str) -> bool;
}

/// Source of bearer tokens for login sessions.
///
/// The plaintext token is handed to the client once; only
/// [`hash_token`](SessionTokens::hash_token) output is persisted.
pub trait SessionTokens: Send + Sync {
    /// Generate a fresh random token.
    fn generate_token(&self) -> String;

    /// Deterministic hex digest of a token, used as the lookup key.
    fn hash_token(&self, token: &str) -> String;
}
