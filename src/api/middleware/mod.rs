//! API middleware components

pub mod basic_auth;

pub use basic_auth::RequireAccount;
