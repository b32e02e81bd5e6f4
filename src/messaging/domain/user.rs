//! The user aggregate: an account that can send and receive messages.

use super::email::EmailAddress;
use super::error::ValidationError;
use super::ids::UserId;
use super::rules;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A registered user account.
///
/// # Invariants
///
/// - `id` always carries UUIDv4 version and variant bits
/// - `name` and `email` passed validation at construction; a user is never
///   observably in a partially validated state
/// - Two users are the same entity iff their ids are equal
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::User;
///
/// let user = User::new("Ann", "ann@gmail.com").expect("valid user");
/// assert_eq!(user.name(), "Ann");
/// assert_eq!(user.email().domain(), "gmail.com");
/// ```
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
}

impl User {
    /// Creates a user with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the name or email is rejected; the
    /// username rule runs before the email rules.
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Self::build(UserId::new(), name, email)
    }

    /// Recreates a user from a caller-supplied identifier, for round-tripping
    /// a previously issued representation.
    ///
    /// The identifier is validated first, then the name, then the email,
    /// short-circuiting on the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUserId`] when the identifier does
    /// not parse as a 32-character hex UUIDv4, or the name/email validation
    /// errors otherwise.
    pub fn from_existing(id: &str, name: &str, email: &str) -> Result<Self, ValidationError> {
        let parsed = UserId::parse(id)?;
        Self::build(parsed, name, email)
    }

    fn build(id: UserId, name: &str, email: &str) -> Result<Self, ValidationError> {
        rules::validate_username(name)?;
        let address = rules::validate_email(email)?;
        Ok(Self {
            id,
            name: name.to_owned(),
            email: address,
        })
    }

    /// Reconstructs a user from stored field values.
    ///
    /// The values must originate from a previously validated user; this
    /// constructor performs no validation and exists for persistence
    /// adapters.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        let PersistedUserData { id, name, email } = data;
        Self { id, name, email }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the validated email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns a copy with the patch merged in.
    ///
    /// Fields absent from the patch keep their current value; the identifier
    /// never changes. The patch carries only validated values, so the result
    /// is always a valid user.
    #[must_use]
    pub fn apply_patch(&self, patch: &UserPatch) -> Self {
        Self {
            id: self.id,
            name: patch
                .name
                .clone()
                .unwrap_or_else(|| self.name.clone()),
            email: patch
                .email
                .clone()
                .unwrap_or_else(|| self.email.clone()),
        }
    }

    /// Returns the stable boundary serialisation of this user.
    ///
    /// The key set is exactly `{id, name, email}`; `id` is the 32-character
    /// hex form.
    #[must_use]
    pub fn to_representation(&self) -> UserRepresentation {
        UserRepresentation {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.to_string(),
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Stored field values for reconstructing a user in a persistence adapter.
#[derive(Debug, Clone)]
pub struct PersistedUserData {
    /// The user identifier.
    pub id: UserId,
    /// The stored display name.
    pub name: String,
    /// The stored email address.
    pub email: EmailAddress,
}

/// A validated partial update for a user.
///
/// Empty-string inputs are treated the same as absent fields: the stored
/// value is kept. A caller therefore cannot clear a field through a patch.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::UserPatch;
///
/// let patch = UserPatch::new(Some("Annette"), None).expect("valid patch");
/// assert!(!patch.is_empty());
///
/// let noop = UserPatch::new(Some(""), None).expect("valid patch");
/// assert!(noop.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<String>,
    email: Option<EmailAddress>,
}

impl UserPatch {
    /// Builds a patch from optional raw inputs, validating present fields
    /// with the same rules as user construction.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a present, non-empty field fails
    /// validation.
    pub fn new(name: Option<&str>, email: Option<&str>) -> Result<Self, ValidationError> {
        let name = name
            .filter(|value| !value.is_empty())
            .map(|value| rules::validate_username(value).map(|()| value.to_owned()))
            .transpose()?;
        let email = email
            .filter(|value| !value.is_empty())
            .map(rules::validate_email)
            .transpose()?;
        Ok(Self { name, email })
    }

    /// Returns the replacement name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the replacement email, if any.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Stable boundary serialisation of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRepresentation {
    /// 32-character hex identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address in `local@domain` form.
    pub email: String,
}
