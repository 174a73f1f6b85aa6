//! Business logic and repository trait definitions for Max AI.
//!
//! This crate holds the query dispatcher and defines the "ports"
//! (repository, search, and chat-completion traits) that the infrastructure
//! layer implements. It depends only on `maxai-types`, never on
//! `maxai-infra` or any database/IO crate.

pub mod assistant;
pub mod dispatch;
pub mod llm;
pub mod repository;
pub mod search;
pub mod service;
