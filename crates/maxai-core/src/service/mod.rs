//! Business logic services (use cases).
//!
//! Services orchestrate repository calls, collaborator calls, and business
//! rules. They depend on traits (ports), never on concrete infrastructure
//! implementations.

pub mod account;
pub mod hash;
pub mod query;
