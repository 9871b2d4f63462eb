//! Test utilities shared across the atlas workspace
//!
//! This crate provides common testing infrastructure including:
//! - Serialized environment variable overrides ([`EnvVarGuard`])
//! - Temporary `.netrc` homes ([`NetrcGuard`])
//! - Wiremock shortcuts for JSON endpoints ([`mock_json`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod mock;
pub mod netrc;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use mock::{mock_json, request_body_json};
pub use netrc::NetrcGuard;
