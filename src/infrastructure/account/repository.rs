//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;

/// In-memory implementation of AccountRepository
///
/// State lives only for the process lifetime. A single write lock
/// serializes mutations, which covers the per-identifier atomicity the
/// store contract requires.
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let map = accounts
            .into_iter()
            .map(|a| (a.id().as_str().to_string(), a))
            .collect();

        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id.as_str()).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let id = account.id().as_str().to_string();

        if accounts.contains_key(&id) {
            return Err(DomainError::conflict("already same user_id is used"));
        }

        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let id = account.id().as_str().to_string();

        if !accounts.contains_key(&id) {
            return Err(DomainError::not_found(format!(
                "Account '{}' not found",
                id
            )));
        }

        accounts.insert(id, account.clone());
        Ok(account.clone())
    }

    async fn delete(&self, id: &AccountId) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(id.as_str()).is_some())
    }
}
