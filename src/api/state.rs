//! Application state for shared services

use std::sync::Arc;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;
use crate::infrastructure::account::{
    AccountService, CreateAccountRequest, InMemoryAccountRepository, SecretHasher,
    Sha256SecretHasher, UpdateAccountRequest,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

impl AppState {
    /// Production state: in-memory store plus SHA-256 hashing
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryAccountRepository::new());
        let hasher = Arc::new(Sha256SecretHasher::new());

        Self {
            account_service: Arc::new(AccountService::new(repository, hasher)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn create(&self, request: CreateAccountRequest) -> Result<Account, DomainError>;
    async fn authenticate(&self, user_id: &str, password: &str)
        -> Result<AccountId, DomainError>;
    async fn get(
        &self,
        target_id: &str,
        authenticated_id: &AccountId,
    ) -> Result<Account, DomainError>;
    async fn update(
        &self,
        target_id: &str,
        authenticated_id: &AccountId,
        request: UpdateAccountRequest,
    ) -> Result<Account, DomainError>;
    async fn delete(&self, authenticated_id: &AccountId) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: AccountRepository, H: SecretHasher> AccountServiceTrait for AccountService<R, H> {
    async fn create(&self, request: CreateAccountRequest) -> Result<Account, DomainError> {
        AccountService::create(self, request).await
    }

    async fn authenticate(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<AccountId, DomainError> {
        AccountService::authenticate(self, user_id, password).await
    }

    async fn get(
        &self,
        target_id: &str,
        authenticated_id: &AccountId,
    ) -> Result<Account, DomainError> {
        AccountService::get(self, target_id, authenticated_id).await
    }

    async fn update(
        &self,
        target_id: &str,
        authenticated_id: &AccountId,
        request: UpdateAccountRequest,
    ) -> Result<Account, DomainError> {
        AccountService::update(self, target_id, authenticated_id, request).await
    }

    async fn delete(&self, authenticated_id: &AccountId) -> Result<(), DomainError> {
        AccountService::delete(self, authenticated_id).await
    }
}
