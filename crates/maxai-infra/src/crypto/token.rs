//! Session tokens and SHA-256 token hashing.
//!
//! Implements the `SessionTokens` trait from `maxai-core`. Tokens are 32
//! random bytes, hex-encoded behind a `maxai_` prefix. Only the SHA-256
//! digest of a token is ever written to the database.

use sha2::{Digest, Sha256};

use maxai_core::service::hash::SessionTokens;

use super::{hex_encode, rand_bytes};

/// Prefix that makes leaked tokens easy to recognise.
pub const TOKEN_PREFIX: &str = "maxai_";

/// OS-random tokens with lowercase hex SHA-256 lookup hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256SessionTokens;

impl Sha256SessionTokens {
    pub fn new() -> Self {
        Self
    }
}

impl SessionTokens for Sha256SessionTokens {
    fn generate_token(&self) -> String {
        format!("{TOKEN_PREFIX}{}", hex_encode(&rand_bytes()))
    }

    fn hash_token(&self, token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        format!("{:x}", digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_format() {
        let token = Sha256SessionTokens::new().generate_token();
        assert!(token.starts_with(TOKEN_PREFIX));
        let hex = &token[TOKEN_PREFIX.len()..];
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens = Sha256SessionTokens::new();
        assert_ne!(tokens.generate_token(), tokens.generate_token());
    }

    #[test]
    fn test_sha256_hash_known_value() {
        // SHA-256 of empty string
        assert_eq!(
            Sha256SessionTokens.hash_token(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_is_deterministic_and_not_the_token() {
        let tokens = Sha256SessionTokens::new();
        let token = tokens.generate_token();
        let hash = tokens.hash_token(&token);
        assert_eq!(hash, tokens.hash_token(&token));
        assert_ne!(hash, token);
        assert_eq!(hash.len(), 64);
    }
}
