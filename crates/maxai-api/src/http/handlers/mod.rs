//! HTTP request handlers for the REST API.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod history;
pub mod query;
