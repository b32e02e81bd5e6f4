//! Error types for domain validation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! can be inspected by callers. Messages are written to be surfaced verbatim
//! by the boundary layer.

use thiserror::Error;

/// Errors returned while validating user and message input.
///
/// Every variant is recoverable by the caller supplying corrected input;
/// none are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The username is missing or its character length is outside [2, 16].
    #[error("username must be between 2 and 16 characters long")]
    InvalidUsernameLength,

    /// The raw email input exceeds the maximum stored length.
    #[error("email must be at most 64 characters long")]
    EmailTooLong,

    /// The email does not split into a non-empty local part and domain
    /// around a single `@`.
    #[error("invalid email address")]
    InvalidEmail,

    /// The email domain is not on the provider allow-list.
    #[error("email provider {0} is not allowed; only gmail.com, mail.ru, outlook.com are allowed")]
    DisallowedEmailProvider(String),

    /// The message content is empty.
    #[error("message content must not be empty")]
    EmptyContent,

    /// The message content exceeds the maximum length.
    #[error("message content must not exceed 250 characters, got {0}")]
    ContentTooLong(usize),

    /// The supplied user identifier is not a 32-character hex UUIDv4.
    #[error("invalid existing user id: {0}")]
    InvalidUserId(String),

    /// The supplied message identifier is not a 32-character hex UUIDv4.
    #[error("invalid message id: {0}")]
    InvalidMessageId(String),

    /// The message listing limit is outside [1, 100].
    #[error("limit must be between 1 and 100, got {0}")]
    LimitOutOfRange(u32),
}
