//! Account domain
//!
//! This module provides domain types and traits for the account service,
//! including the account entity, field validation, and the repository
//! trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Account, AccountId};
pub use repository::AccountRepository;
pub use validation::{
    validate_account_id, validate_comment, validate_nickname, validate_secret,
    AccountValidationError,
};

#[cfg(test)]
pub use repository::mock::MockAccountRepository;
