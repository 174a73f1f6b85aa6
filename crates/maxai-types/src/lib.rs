//! Shared domain types for Max AI.
//!
//! This crate contains the core domain types used across the workspace:
//! dispatch outcomes, search history, users, search results, LLM request
//! shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod llm;
pub mod query;
pub mod search;
pub mod user;
