//! Infrastructure layer for Max AI.
//!
//! Contains implementations of the ports defined in `maxai-core`: SQLite
//! storage, the Groq chat-completion client, the Google Custom Search
//! client, Argon2/SHA-256 credential hashing, and configuration loading.

pub mod config;
pub mod crypto;
pub mod filesystem;
pub mod llm;
pub mod search;
pub mod sqlite;
