//! Account API
//!
//! A minimal user-account HTTP service: account creation, credential-based
//! retrieval, profile update, and account deletion, backed by
//! process-local memory. Credentials are verified against a SHA-256 hash
//! with a constant-time comparison; all state lives for the process
//! lifetime only.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
