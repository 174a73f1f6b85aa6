//! Cryptographic operations for Max AI.
//!
//! - `password`: Argon2id password hashing
//! - `token`: random session tokens and their SHA-256 lookup hashes

pub mod password;
pub mod token;

/// Generate 32 random bytes using the OS CSPRNG.
pub(crate) fn rand_bytes() -> [u8; 32] {
    use aes_gcm::aead::OsRng;
    use aes_gcm::aead::rand_core::RngCore;
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Hex-encode bytes to a lowercase string.
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
