//! HTTP Basic authentication middleware
//!
//! Credentials arrive as `Authorization: Basic <base64(id:secret)>`. A
//! missing or malformed header, undecodable base64, and a failed
//! credential check all produce the same 401 response, so callers cannot
//! distinguish whether an identifier exists.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::account::AccountId;
use crate::domain::DomainError;

/// Extractor that requires valid Basic credentials
#[derive(Debug, Clone)]
pub struct RequireAccount(pub AccountId);

impl FromRequestParts<AppState> for RequireAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (user_id, password) = extract_basic_credentials(&parts.headers)?;

        debug!(user_id = %user_id, "verifying Basic credentials");

        let id = state
            .account_service
            .authenticate(&user_id, &password)
            .await
            .map_err(|e| match e {
                DomainError::AuthFailed => ApiError::unauthorized(),
                other => ApiError::internal(other.to_string()),
            })?;

        Ok(RequireAccount(id))
    }
}

/// Extract an identifier+secret pair from a Basic Authorization header
pub fn extract_basic_credentials(headers: &HeaderMap) -> Result<(String, String), ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(ApiError::unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| ApiError::unauthorized())?;

    let encoded = auth_str
        .strip_prefix("Basic ")
        .ok_or_else(ApiError::unauthorized)?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::unauthorized())?;

    let decoded = String::from_utf8(decoded).map_err(|_| ApiError::unauthorized())?;

    let (user_id, password) = decoded.split_once(':').ok_or_else(ApiError::unauthorized)?;

    Ok((user_id.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn basic_header(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_extract_valid_credentials() {
        // base64("TaroYamada:PaSswd4TY")
        let headers = basic_header("Basic VGFyb1lhbWFkYTpQYVNzd2Q0VFk=");

        let (user_id, password) = extract_basic_credentials(&headers).unwrap();
        assert_eq!(user_id, "TaroYamada");
        assert_eq!(password, "PaSswd4TY");
    }

    #[test]
    fn test_secret_may_contain_colons() {
        // base64("johndoe1:pass:word")
        let headers = basic_header("Basic am9obmRvZTE6cGFzczp3b3Jk");

        let (user_id, password) = extract_basic_credentials(&headers).unwrap();
        assert_eq!(user_id, "johndoe1");
        assert_eq!(password, "pass:word");
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();

        let err = extract_basic_credentials(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.body.message, "Authentication Failed");
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = basic_header("Bearer some.jwt.token");

        let err = extract_basic_credentials(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_base64() {
        let headers = basic_header("Basic not-base64!!!");

        let err = extract_basic_credentials(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_missing_colon_separator() {
        // base64("justauserid")
        let headers = basic_header("Basic anVzdGF1c2VyaWQ=");

        let err = extract_basic_credentials(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
