//! The message aggregate: a short directed note from one user to another.
//!
//! Messages are immutable after creation; there is no edit transition.

use super::error::ValidationError;
use super::ids::{MessageId, UserId};
use super::rules;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message sent between two users.
///
/// # Invariants
///
/// - `id` is generated at creation and never caller-supplied
/// - `content` passed validation at construction (non-empty, at most 250
///   characters)
/// - `timestamp` is UTC, set at construction, immutable
///
/// The entity does not verify that `author_id` and `recipient_id` reference
/// existing users, nor that they differ; both checks belong to the service
/// layer.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::{Message, UserId};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let message = Message::new(UserId::new(), UserId::new(), "hello", &clock)
///     .expect("valid message");
/// assert_eq!(message.content(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    author_id: UserId,
    recipient_id: UserId,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message with a fresh identifier and the clock's current
    /// UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyContent`] or
    /// [`ValidationError::ContentTooLong`] when the content is rejected.
    pub fn new(
        author_id: UserId,
        recipient_id: UserId,
        content: &str,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        rules::validate_content(content)?;
        Ok(Self {
            id: MessageId::new(),
            author_id,
            recipient_id,
            content: content.to_owned(),
            timestamp: clock.utc(),
        })
    }

    /// Reconstructs a message from stored field values.
    ///
    /// The values must originate from a previously validated message; this
    /// constructor performs no validation and exists for persistence
    /// adapters.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        let PersistedMessageData {
            id,
            author_id,
            recipient_id,
            content,
            timestamp,
        } = data;
        Self {
            id,
            author_id,
            recipient_id,
            content,
            timestamp,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sending user's identifier.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the receiving user's identifier.
    #[must_use]
    pub const fn recipient_id(&self) -> UserId {
        self.recipient_id
    }

    /// Returns the message content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation time in UTC.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the stable boundary serialisation of this message.
    ///
    /// The key set is exactly `{id, author_id, recipient_id, content,
    /// timestamp}`; identifiers are 32-character hex and the timestamp is an
    /// ISO-8601 UTC string.
    #[must_use]
    pub fn to_representation(&self) -> MessageRepresentation {
        MessageRepresentation {
            id: self.id.to_string(),
            author_id: self.author_id.to_string(),
            recipient_id: self.recipient_id.to_string(),
            content: self.content.clone(),
            timestamp: self.timestamp.to_rfc3339(),
        }
    }
}

/// Stored field values for reconstructing a message in a persistence
/// adapter.
#[derive(Debug, Clone)]
pub struct PersistedMessageData {
    /// The message identifier.
    pub id: MessageId,
    /// The sending user's identifier.
    pub author_id: UserId,
    /// The receiving user's identifier.
    pub recipient_id: UserId,
    /// The stored content.
    pub content: String,
    /// The stored creation time.
    pub timestamp: DateTime<Utc>,
}

/// Stable boundary serialisation of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRepresentation {
    /// 32-character hex identifier.
    pub id: String,
    /// 32-character hex identifier of the author.
    pub author_id: String,
    /// 32-character hex identifier of the recipient.
    pub recipient_id: String,
    /// Message content.
    pub content: String,
    /// Creation time as an ISO-8601 UTC string.
    pub timestamp: String,
}
