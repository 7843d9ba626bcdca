//! Infrastructure layer - concrete implementations of domain traits

pub mod account;
pub mod logging;
