//! Account service - create/read/update/delete orchestration
//!
//! Enforces the authentication, ownership, and field-immutability rules on
//! top of the repository. Every failure is terminal for the request; an
//! update either applies all valid fields or none (validation runs before
//! any mutation).

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::account::{
    validate_account_id, validate_comment, validate_nickname, validate_secret, Account, AccountId,
    AccountRepository, AccountValidationError,
};
use crate::domain::DomainError;

use super::secret::SecretHasher;

/// Request for creating a new account
#[derive(Debug, Clone, Default)]
pub struct CreateAccountRequest {
    pub user_id: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

/// Request for updating an account's profile fields
///
/// `user_id` and `password` are carried so that an attempt to set them can
/// be rejected explicitly instead of silently ignored.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountRequest {
    pub user_id: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

/// Account service for authentication and account management
#[derive(Debug)]
pub struct AccountService<R: AccountRepository, H: SecretHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AccountRepository, H: SecretHasher> AccountService<R, H> {
    /// Create a new account service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new account
    ///
    /// Check order: required fields, then field format, then the duplicate
    /// check (performed atomically by the repository).
    pub async fn create(&self, request: CreateAccountRequest) -> Result<Account, DomainError> {
        let (user_id, password) = match (&request.user_id, &request.password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
            _ => {
                return Err(validation_error(
                    AccountValidationError::MissingRequiredFields,
                ))
            }
        };

        validate_account_id(user_id).map_err(validation_error)?;
        validate_secret(password).map_err(validation_error)?;

        if let Some(nickname) = &request.nickname {
            validate_nickname(nickname).map_err(validation_error)?;
        }

        if let Some(comment) = &request.comment {
            validate_comment(comment).map_err(validation_error)?;
        }

        // Already validated above; unreachable in practice
        let id = AccountId::new(user_id.as_str()).map_err(validation_error)?;
        let secret_hash = self.hasher.hash(password);

        let account = Account::new(id, secret_hash, request.nickname, request.comment);
        let account = self.repository.create(account).await?;

        info!(user_id = %account.id(), "account created");

        Ok(account)
    }

    /// Authenticate an identifier+secret pair
    ///
    /// A missing account and a hash mismatch are indistinguishable to the
    /// caller, so authentication cannot be used to probe for existing
    /// identifiers.
    pub async fn authenticate(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<AccountId, DomainError> {
        let id = AccountId::new(user_id).map_err(|_| DomainError::AuthFailed)?;

        let account = self
            .repository
            .get(&id)
            .await?
            .ok_or(DomainError::AuthFailed)?;

        if !self.hasher.verify(password, account.secret_hash()) {
            debug!(user_id = %id, "secret verification failed");
            return Err(DomainError::AuthFailed);
        }

        Ok(id)
    }

    /// Get an account, enforcing the ownership check
    pub async fn get(
        &self,
        target_id: &str,
        authenticated_id: &AccountId,
    ) -> Result<Account, DomainError> {
        if target_id != authenticated_id.as_str() {
            return Err(DomainError::forbidden("Permission denied"));
        }

        self.repository
            .get(authenticated_id)
            .await?
            .ok_or_else(|| DomainError::not_found("No User found"))
    }

    /// Update nickname and/or comment on the authenticated account
    ///
    /// Ownership is checked first, then the immutable-field rule, then the
    /// nothing-to-update rule, then field validation. Only present fields
    /// change; an explicitly empty nickname resets to the identifier.
    pub async fn update(
        &self,
        target_id: &str,
        authenticated_id: &AccountId,
        request: UpdateAccountRequest,
    ) -> Result<Account, DomainError> {
        if target_id != authenticated_id.as_str() {
            return Err(DomainError::forbidden("Permission denied"));
        }

        if request.user_id.is_some() || request.password.is_some() {
            return Err(DomainError::bad_request("not updatable user_id and password"));
        }

        if request.nickname.is_none() && request.comment.is_none() {
            return Err(DomainError::bad_request("required nickname or comment"));
        }

        if let Some(nickname) = &request.nickname {
            validate_nickname(nickname).map_err(validation_error)?;
        }

        if let Some(comment) = &request.comment {
            validate_comment(comment).map_err(validation_error)?;
        }

        let mut account = self
            .repository
            .get(authenticated_id)
            .await?
            .ok_or_else(|| DomainError::not_found("No User found"))?;

        if let Some(nickname) = request.nickname {
            account.set_nickname(nickname);
        }

        if let Some(comment) = request.comment {
            account.set_comment(comment);
        }

        let account = self.repository.update(&account).await?;

        info!(user_id = %account.id(), "account updated");

        Ok(account)
    }

    /// Delete the authenticated account
    ///
    /// Deleting an already-absent account fails with `NotFound` rather
    /// than crashing, so repeated deletes are safe.
    pub async fn delete(&self, authenticated_id: &AccountId) -> Result<(), DomainError> {
        if !self.repository.delete(authenticated_id).await? {
            return Err(DomainError::not_found("User not found"));
        }

        info!(user_id = %authenticated_id, "account deleted");

        Ok(())
    }
}

fn validation_error(error: AccountValidationError) -> DomainError {
    DomainError::bad_request(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::MockAccountRepository;
    use crate::infrastructure::account::secret::Sha256SecretHasher;

    fn service() -> AccountService<MockAccountRepository, Sha256SecretHasher> {
        AccountService::new(
            Arc::new(MockAccountRepository::new()),
            Arc::new(Sha256SecretHasher::new()),
        )
    }

    fn signup(user_id: &str, password: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            user_id: Some(user_id.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let service = service();

        let account = service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();

        assert_eq!(account.id().as_str(), "johndoe1");
        assert_eq!(account.nickname(), "johndoe1");
        assert_eq!(account.comment(), "");
        assert_ne!(account.secret_hash(), "Passw0rd!");
    }

    #[tokio::test]
    async fn test_create_missing_required_fields() {
        let service = service();

        for request in [
            CreateAccountRequest::default(),
            signup("johndoe1", ""),
            signup("", "Passw0rd!"),
            CreateAccountRequest {
                user_id: Some("johndoe1".to_string()),
                ..Default::default()
            },
        ] {
            let err = service.create(request).await.unwrap_err();
            assert_eq!(
                err,
                DomainError::bad_request("required user_id and password")
            );
        }
    }

    #[tokio::test]
    async fn test_create_invalid_id_format() {
        let service = service();

        let err = service.create(signup("ab", "Passw0rd!")).await.unwrap_err();
        assert!(matches!(err, DomainError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_create_weak_password() {
        let service = service();

        let err = service
            .create(signup("johndoe1", "password"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let service = service();

        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();
        let err = service
            .create(signup("johndoe1", "Passw0rd!"))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::conflict("already same user_id is used"));
    }

    #[tokio::test]
    async fn test_required_check_runs_before_duplicate_check() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();

        // Same id but missing password: the required-field failure wins
        let err = service.create(signup("johndoe1", "")).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::bad_request("required user_id and password")
        );
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();

        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();
        assert_eq!(id.as_str(), "johndoe1");
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();

        let wrong_secret = service
            .authenticate("johndoe1", "WrongPw1!")
            .await
            .unwrap_err();
        let unknown_id = service
            .authenticate("nobody99", "Passw0rd!")
            .await
            .unwrap_err();
        let invalid_id = service.authenticate("no", "Passw0rd!").await.unwrap_err();

        assert_eq!(wrong_secret, DomainError::AuthFailed);
        assert_eq!(unknown_id, DomainError::AuthFailed);
        assert_eq!(invalid_id, DomainError::AuthFailed);
    }

    #[tokio::test]
    async fn test_get_own_account() {
        let service = service();
        let request = CreateAccountRequest {
            nickname: Some("John".to_string()),
            comment: Some("hello".to_string()),
            ..signup("johndoe1", "Passw0rd!")
        };
        service.create(request).await.unwrap();

        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();
        let account = service.get("johndoe1", &id).await.unwrap();

        assert_eq!(account.nickname(), "John");
        assert_eq!(account.comment(), "hello");
    }

    #[tokio::test]
    async fn test_get_other_account_forbidden() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();
        service.create(signup("janedoe1", "Passw0rd!")).await.unwrap();

        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();
        let err = service.get("janedoe1", &id).await.unwrap_err();

        assert!(matches!(err, DomainError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_update_partiality() {
        let service = service();
        let request = CreateAccountRequest {
            nickname: Some("John".to_string()),
            comment: Some("hello".to_string()),
            ..signup("johndoe1", "Passw0rd!")
        };
        service.create(request).await.unwrap();
        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();

        // Nickname only: comment survives
        let account = service
            .update(
                "johndoe1",
                &id,
                UpdateAccountRequest {
                    nickname: Some("Johnny".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(account.nickname(), "Johnny");
        assert_eq!(account.comment(), "hello");

        // Comment only: nickname survives
        let account = service
            .update(
                "johndoe1",
                &id,
                UpdateAccountRequest {
                    comment: Some("goodbye".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(account.nickname(), "Johnny");
        assert_eq!(account.comment(), "goodbye");
    }

    #[tokio::test]
    async fn test_update_empty_nickname_resets_to_id() {
        let service = service();
        let request = CreateAccountRequest {
            nickname: Some("John".to_string()),
            ..signup("johndoe1", "Passw0rd!")
        };
        service.create(request).await.unwrap();
        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();

        let account = service
            .update(
                "johndoe1",
                &id,
                UpdateAccountRequest {
                    nickname: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(account.nickname(), "johndoe1");
    }

    #[tokio::test]
    async fn test_update_immutable_fields_rejected() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();
        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();

        // Rejected even when a valid nickname rides along
        let err = service
            .update(
                "johndoe1",
                &id,
                UpdateAccountRequest {
                    password: Some("NewPassw0rd!".to_string()),
                    nickname: Some("Johnny".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::bad_request("not updatable user_id and password")
        );

        // The valid field was not applied
        let account = service.get("johndoe1", &id).await.unwrap();
        assert_eq!(account.nickname(), "johndoe1");
    }

    #[tokio::test]
    async fn test_update_nothing_to_update() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();
        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();

        let err = service
            .update("johndoe1", &id, UpdateAccountRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::bad_request("required nickname or comment"));
    }

    #[tokio::test]
    async fn test_update_other_account_forbidden() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();
        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();

        let err = service
            .update(
                "janedoe1",
                &id,
                UpdateAccountRequest {
                    nickname: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_delete_then_redelete_not_found() {
        let service = service();
        service.create(signup("johndoe1", "Passw0rd!")).await.unwrap();
        let id = service.authenticate("johndoe1", "Passw0rd!").await.unwrap();

        service.delete(&id).await.unwrap();

        let err = service.delete(&id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let repo = Arc::new(MockAccountRepository::new());
        let service = AccountService::new(repo.clone(), Arc::new(Sha256SecretHasher::new()));

        repo.set_should_fail(true).await;

        let err = service
            .create(signup("johndoe1", "Passw0rd!"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
