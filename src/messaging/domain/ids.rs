//! Domain identifier newtypes for users and messages.
//!
//! These types wrap UUIDv4 values to prevent accidental mixing of different
//! identifier types. The external textual format is the 32-character
//! lowercase hex rendering (no hyphens); [`UserId::parse`] and
//! [`MessageId::parse`] accept only that format with proper version and
//! variant bits.

use super::error::ValidationError;
use std::fmt;
use uuid::{Uuid, Variant};

/// Parses a 32-character hex string into a UUID with v4/RFC 4122 bits.
fn parse_hex_v4(value: &str) -> Option<Uuid> {
    if value.len() != 32 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let uuid = Uuid::try_parse(value).ok()?;
    let well_formed =
        uuid.get_version_num() == 4 && matches!(uuid.get_variant(), Variant::RFC4122);
    well_formed.then_some(uuid)
}

/// Unique identifier for a user account.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::UserId;
///
/// let id = UserId::new();
/// let text = id.to_string();
/// assert_eq!(text.len(), 32);
/// assert_eq!(UserId::parse(&text), Ok(id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a caller-supplied identifier.
    ///
    /// Accepts exactly 32 hex characters whose version and variant bits
    /// mark a random (v4) UUID.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUserId`] when the value does not
    /// parse.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        parse_hex_v4(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidUserId(value.to_owned()))
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

/// Unique identifier for a message.
///
/// Message identifiers are always generated at creation; [`MessageId::parse`]
/// exists for the boundary layer to interpret identifiers echoed back in
/// delete requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMessageId`] when the value is not
    /// 32 hex characters with UUIDv4 version and variant bits.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        parse_hex_v4(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidMessageId(value.to_owned()))
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}
