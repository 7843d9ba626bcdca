//! API error types
//!
//! Every error body carries a machine-readable `message` and, for
//! validation-style failures, a stable `cause` string identifying the
//! rule that failed.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>, cause: Option<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                message: message.into(),
                cause,
            },
        }
    }

    /// Bad request with an operation-level message and a cause string
    pub fn bad_request(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, Some(cause.into()))
    }

    /// Authentication failure
    ///
    /// Always the same body regardless of whether the identifier exists.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Authentication Failed", None)
    }

    /// Ownership check failure
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message, None)
    }

    /// Target identifier absent
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, None)
    }

    /// Target identifier absent, with a cause string
    pub fn not_found_with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, Some(cause.into()))
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, None)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();

        if self.status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"account-api\""),
            );
        }

        response
    }
}
