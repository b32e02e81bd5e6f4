//! Repository port for user and message persistence.
//!
//! Defines the abstract interface over the persistence collaborator,
//! allowing different implementations (`PostgreSQL`, in-memory for tests).

use crate::messaging::domain::{Message, MessageId, MessageLimit, User, UserId, UserPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for user and message persistence operations.
///
/// The repository owns no state of its own: every operation round-trips to
/// the backing store, and each call is one coherent unit against it. "Not
/// found" is always an absent result (`None` or `false`), never an error,
/// so callers can distinguish "didn't exist" from "operation failed".
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - User identifiers are unique (duplicate creation is a
///   [`RepositoryError::DuplicateUser`])
/// - [`delete_user`](Self::delete_user) and
///   [`delete_message`](Self::delete_message) are single logical operations
///   with no observable half-removed state
/// - [`update_user`](Self::update_user) performs one coherent
///   read-modify-write
/// - Concurrent access relies on the backing store's isolation; no caller
///   may assume exclusive access
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a validated user.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateUser`] when a user with the same
    /// identifier already exists, or [`RepositoryError::Persistence`] when
    /// the backing store fails.
    async fn create_user(&self, user: &User) -> RepositoryResult<()>;

    /// Retrieves a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the query fails.
    async fn find_user(&self, id: UserId) -> RepositoryResult<Option<User>>;

    /// Returns all users ordered by identifier.
    ///
    /// An empty list is a valid terminal state, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the query fails.
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;

    /// Merges a patch into an existing user and persists the result.
    ///
    /// Returns the updated user, or `None` when no user matches the
    /// identifier. Fields absent from the patch keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the read or write
    /// fails.
    async fn update_user(&self, id: UserId, patch: &UserPatch) -> RepositoryResult<Option<User>>;

    /// Deletes a user by identifier.
    ///
    /// Returns `true` when a matching record existed and was removed.
    /// Messages referencing the user are left in place; whether to cascade
    /// is an open product decision.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the delete fails.
    async fn delete_user(&self, id: UserId) -> RepositoryResult<bool>;

    /// Persists a constructed message.
    ///
    /// Performs no author/recipient existence checks; those belong to the
    /// service layer.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the insert fails,
    /// including on an identifier collision.
    async fn store_message(&self, message: &Message) -> RepositoryResult<()>;

    /// Returns messages sent to a recipient, oldest first, bounded by
    /// `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the query fails.
    async fn messages_for_recipient(
        &self,
        recipient_id: UserId,
        limit: MessageLimit,
    ) -> RepositoryResult<Vec<Message>>;

    /// Deletes the message matching both the identifier and the recipient.
    ///
    /// Returns `true` only when both matched; a message id that exists under
    /// a different recipient is not removed.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the delete fails.
    async fn delete_message(
        &self,
        recipient_id: UserId,
        message_id: MessageId,
    ) -> RepositoryResult<bool>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// The backing store failed for reasons unrelated to domain validity.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        // Unique violations that carry domain meaning (duplicate user id)
        // are mapped at the insert site where the identifier is known; every
        // other Diesel error is an opaque persistence failure.
        Self::persistence(err)
    }
}
