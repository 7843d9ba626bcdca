//! Account API endpoints
//!
//! Four operations: signup (no auth), read, update, and close, the last
//! three behind HTTP Basic credentials. Exact status codes and the
//! `{message, cause}` error bodies are part of the contract.

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireAccount;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Account, DomainError};
use crate::infrastructure::account::{CreateAccountRequest, UpdateAccountRequest};

/// Signup request body
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub user_id: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

/// Public view returned from signup (comment deliberately excluded)
#[derive(Debug, Serialize)]
pub struct SignupUser {
    pub user_id: String,
    pub nickname: String,
}

/// Signup response
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: SignupUser,
}

/// Public view of an account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub nickname: String,
    pub comment: String,
}

impl UserResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            user_id: account.id().as_str().to_string(),
            nickname: account.nickname().to_string(),
            comment: account.comment().to_string(),
        }
    }
}

/// Response carrying a message and an account view
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Update request body
///
/// `user_id` and `password` are deserialized so the immutable-field rule
/// can reject them explicitly.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub user_id: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

/// Message-only response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a new account
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    let account = state
        .account_service
        .create(CreateAccountRequest {
            user_id: request.user_id,
            password: request.password,
            nickname: request.nickname,
            comment: request.comment,
        })
        .await
        .map_err(|e| match e {
            DomainError::BadRequest { cause } | DomainError::Conflict { cause } => {
                ApiError::bad_request("Account creation failed", cause)
            }
            other => ApiError::internal(other.to_string()),
        })?;

    Ok(Json(SignupResponse {
        message: "Account successfully created".to_string(),
        user: SignupUser {
            user_id: account.id().as_str().to_string(),
            nickname: account.nickname().to_string(),
        },
    }))
}

/// Get account details
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    RequireAccount(authenticated_id): RequireAccount,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let account = state
        .account_service
        .get(&user_id, &authenticated_id)
        .await
        .map_err(|e| match e {
            DomainError::Forbidden { message } => ApiError::forbidden(message),
            DomainError::NotFound { message } => ApiError::not_found(message),
            other => ApiError::internal(other.to_string()),
        })?;

    Ok(Json(UserDetailResponse {
        message: "User details by user_id".to_string(),
        user: UserResponse::from_account(&account),
    }))
}

/// Update nickname and/or comment
///
/// PATCH /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    RequireAccount(authenticated_id): RequireAccount,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let account = state
        .account_service
        .update(
            &user_id,
            &authenticated_id,
            UpdateAccountRequest {
                user_id: request.user_id,
                password: request.password,
                nickname: request.nickname,
                comment: request.comment,
            },
        )
        .await
        .map_err(|e| match e {
            DomainError::BadRequest { cause } => ApiError::bad_request("User update failed", cause),
            DomainError::Forbidden { message } => ApiError::forbidden(message),
            DomainError::NotFound { message } => ApiError::not_found(message),
            other => ApiError::internal(other.to_string()),
        })?;

    Ok(Json(UserDetailResponse {
        message: "User successfully updated".to_string(),
        user: UserResponse::from_account(&account),
    }))
}

/// Delete the authenticated account
///
/// POST /close
pub async fn close_account(
    State(state): State<AppState>,
    RequireAccount(authenticated_id): RequireAccount,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .account_service
        .delete(&authenticated_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => {
                ApiError::not_found_with_cause("Account deletion failed", "User not found")
            }
            other => ApiError::internal(other.to_string()),
        })?;

    Ok(Json(MessageResponse {
        message: "Account and user successfully removed".to_string(),
    }))
}
