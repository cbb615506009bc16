//! Data models
//!
//! Shared between the gateway client and the front-ends.
//! Field names follow the backend's JSON (camelCase, `_id` for identifiers).

pub mod dish;

// Re-exports
pub use dish::*;
