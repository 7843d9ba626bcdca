//! Account entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_account_id, AccountValidationError};

/// Account identifier - 6 to 20 ASCII alphanumeric characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Create a new AccountId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, AccountValidationError> {
        let id = id.into();
        validate_account_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored account record
///
/// The identifier is immutable after creation and the secret is retained
/// only as a one-way hash. Nickname and comment are the only fields
/// reachable from the profile-update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    id: AccountId,
    /// One-way hash of the secret - never exposed in serialization
    #[serde(skip_serializing)]
    secret_hash: String,
    /// Display name, defaults to the identifier
    nickname: String,
    /// Free-form comment, defaults to empty
    comment: String,
}

impl Account {
    /// Create a new account, applying the nickname/comment defaults
    pub fn new(
        id: AccountId,
        secret_hash: impl Into<String>,
        nickname: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let nickname = match nickname {
            Some(n) if !n.is_empty() => n,
            _ => id.as_str().to_string(),
        };

        Self {
            id,
            secret_hash: secret_hash.into(),
            nickname,
            comment: comment.unwrap_or_default(),
        }
    }

    // Getters

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn secret_hash(&self) -> &str {
        &self.secret_hash
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    // Mutators

    /// Update the nickname; an empty value resets it to the identifier
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        let nickname = nickname.into();

        self.nickname = if nickname.is_empty() {
            self.id.as_str().to_string()
        } else {
            nickname
        };
    }

    /// Update the comment
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }
}
