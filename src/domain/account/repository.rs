//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId};
use crate::domain::DomainError;

/// Repository trait for account storage
///
/// Each operation is atomic with respect to a single identifier: a create
/// and a concurrent delete on the same id never leave a half-written
/// record.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its identifier
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Store a new account, failing with `Conflict` if the id exists
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account, failing with `NotFound` if absent
    async fn update(&self, account: &Account) -> Result<Account, DomainError>;

    /// Delete an account, returning `false` if it was already absent
    async fn delete(&self, id: &AccountId) -> Result<bool, DomainError>;

    /// Check if an account exists
    async fn exists(&self, id: &AccountId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
