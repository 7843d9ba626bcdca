//! Account field validation
//!
//! Pure checks applied before any store mutation. Checks are fail-fast and
//! run in a deterministic order: required fields first, then format. The
//! `Display` output of each variant is the stable cause string surfaced to
//! API clients.

use thiserror::Error;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    #[error("required user_id and password")]
    MissingRequiredFields,

    #[error("user_id must be between {0} and {1} characters")]
    IdLength(usize, usize),

    #[error("user_id must contain only alphanumeric characters")]
    IdCharset,

    #[error("password must be between {0} and {1} characters")]
    SecretLength(usize, usize),

    #[error("password must contain only printable ASCII characters")]
    SecretCharset,

    #[error("password must contain at least one uppercase letter, one lowercase letter, one number, and one special character")]
    SecretComplexity,

    #[error("nickname must be {0} characters or less")]
    NicknameTooLong(usize),

    #[error("nickname must not contain control characters")]
    NicknameControlChars,

    #[error("comment must be {0} characters or less")]
    CommentTooLong(usize),

    #[error("comment must not contain control characters")]
    CommentControlChars,
}

const MIN_ACCOUNT_ID_LENGTH: usize = 6;
const MAX_ACCOUNT_ID_LENGTH: usize = 20;
const MIN_SECRET_LENGTH: usize = 8;
const MAX_SECRET_LENGTH: usize = 20;
const MAX_NICKNAME_LENGTH: usize = 30;
const MAX_COMMENT_LENGTH: usize = 100;

/// Symbols accepted (and one required) in a secret
const SECRET_SYMBOLS: &str = "!@#$%^&*";

/// Validate an account identifier
///
/// Rules:
/// - 6 to 20 characters
/// - Only ASCII alphanumeric characters
pub fn validate_account_id(id: &str) -> Result<(), AccountValidationError> {
    let length = id.chars().count();

    if length < MIN_ACCOUNT_ID_LENGTH || length > MAX_ACCOUNT_ID_LENGTH {
        return Err(AccountValidationError::IdLength(
            MIN_ACCOUNT_ID_LENGTH,
            MAX_ACCOUNT_ID_LENGTH,
        ));
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AccountValidationError::IdCharset);
    }

    Ok(())
}

/// Validate a secret (the plain password presented at signup)
///
/// Rules:
/// - 8 to 20 characters
/// - Printable ASCII only
/// - At least one lowercase letter, one uppercase letter, one digit,
///   and one symbol from `!@#$%^&*`
pub fn validate_secret(secret: &str) -> Result<(), AccountValidationError> {
    let length = secret.chars().count();

    if length < MIN_SECRET_LENGTH || length > MAX_SECRET_LENGTH {
        return Err(AccountValidationError::SecretLength(
            MIN_SECRET_LENGTH,
            MAX_SECRET_LENGTH,
        ));
    }

    if !secret.chars().all(|c| ('!'..='~').contains(&c)) {
        return Err(AccountValidationError::SecretCharset);
    }

    let has_lower = secret.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = secret.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = secret.chars().any(|c| c.is_ascii_digit());
    let has_symbol = secret.chars().any(|c| SECRET_SYMBOLS.contains(c));

    if !(has_lower && has_upper && has_digit && has_symbol) {
        return Err(AccountValidationError::SecretComplexity);
    }

    Ok(())
}

/// Validate a nickname
///
/// Rules:
/// - Maximum 30 characters
/// - No control characters (code points below 0x20 or equal to 0x7F)
pub fn validate_nickname(nickname: &str) -> Result<(), AccountValidationError> {
    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(AccountValidationError::NicknameTooLong(
            MAX_NICKNAME_LENGTH,
        ));
    }

    if nickname.chars().any(is_control_char) {
        return Err(AccountValidationError::NicknameControlChars);
    }

    Ok(())
}

/// Validate a comment
///
/// Rules:
/// - Maximum 100 characters
/// - No control characters
pub fn validate_comment(comment: &str) -> Result<(), AccountValidationError> {
    if comment.chars().count() > MAX_COMMENT_LENGTH {
        return Err(AccountValidationError::CommentTooLong(MAX_COMMENT_LENGTH));
    }

    if comment.chars().any(is_control_char) {
        return Err(AccountValidationError::CommentControlChars);
    }

    Ok(())
}

fn is_control_char(c: char) -> bool {
    (c as u32) < 0x20 || c as u32 == 0x7F
}
