//! Domain layer - entities, validation, and storage traits

pub mod account;
pub mod error;

pub use account::{Account, AccountId, AccountRepository, AccountValidationError};
pub use error::DomainError;
