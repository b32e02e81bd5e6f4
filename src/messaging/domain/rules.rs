//! Pure validation rules for usernames, emails, content, and limits.
//!
//! Each rule is a total function: for every input it terminates with a
//! pass/fail outcome, and on failure carries a human-readable reason that
//! the boundary layer surfaces verbatim.

use super::email::EmailAddress;
use super::error::ValidationError;

/// Minimum username length in characters.
pub const MIN_USERNAME_LENGTH: usize = 2;

/// Maximum username length in characters.
pub const MAX_USERNAME_LENGTH: usize = 16;

/// Maximum raw email input length in characters.
pub const MAX_EMAIL_LENGTH: usize = 64;

/// Maximum message content length in characters.
pub const MAX_CONTENT_LENGTH: usize = 250;

/// Email provider domains accepted at registration.
pub const ALLOWED_EMAIL_PROVIDERS: [&str; 3] = ["gmail.com", "mail.ru", "outlook.com"];

/// Validates a username.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUsernameLength`] when the name is empty
/// or its character length falls outside
/// [[`MIN_USERNAME_LENGTH`], [`MAX_USERNAME_LENGTH`]].
pub fn validate_username(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length < MIN_USERNAME_LENGTH || length > MAX_USERNAME_LENGTH {
        return Err(ValidationError::InvalidUsernameLength);
    }
    Ok(())
}

/// Validates a raw email input and returns the parsed address.
///
/// The length limit applies to the raw input, before any display-name
/// wrapper is stripped.
///
/// # Errors
///
/// Returns [`ValidationError::EmailTooLong`] when the raw input exceeds
/// [`MAX_EMAIL_LENGTH`] characters, [`ValidationError::InvalidEmail`] when
/// it does not parse as a single `local@domain` pair, and
/// [`ValidationError::DisallowedEmailProvider`] when the domain is not in
/// [`ALLOWED_EMAIL_PROVIDERS`].
pub fn validate_email(raw: &str) -> Result<EmailAddress, ValidationError> {
    if raw.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::EmailTooLong);
    }
    let address = EmailAddress::parse(raw)?;
    if !ALLOWED_EMAIL_PROVIDERS.contains(&address.domain()) {
        return Err(ValidationError::DisallowedEmailProvider(
            address.domain().to_owned(),
        ));
    }
    Ok(address)
}

/// Validates message content.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyContent`] when the content is empty and
/// [`ValidationError::ContentTooLong`] when it exceeds
/// [`MAX_CONTENT_LENGTH`] characters.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    let length = content.chars().count();
    if length > MAX_CONTENT_LENGTH {
        return Err(ValidationError::ContentTooLong(length));
    }
    Ok(())
}

/// Validated bound on how many messages a listing returns.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::MessageLimit;
///
/// assert_eq!(MessageLimit::default().value(), 50);
/// assert!(MessageLimit::new(0).is_err());
/// assert!(MessageLimit::new(100).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimit(u32);

impl MessageLimit {
    /// Smallest accepted limit.
    pub const MIN: u32 = 1;

    /// Largest accepted limit.
    pub const MAX: u32 = 100;

    /// Limit applied when the caller does not supply one.
    pub const DEFAULT: u32 = 50;

    /// Creates a validated limit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LimitOutOfRange`] when the value lies
    /// outside [[`Self::MIN`], [`Self::MAX`]].
    pub const fn new(value: u32) -> Result<Self, ValidationError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ValidationError::LimitOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying limit value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for MessageLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
