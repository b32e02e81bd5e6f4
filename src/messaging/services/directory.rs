//! User directory and message exchange service.
//!
//! This is the contract the request-handler layer consumes. It owns the
//! checks individual handlers must not duplicate: participant existence,
//! the self-messaging prohibition, and limit defaulting. Domain validation
//! stays inside entity construction; "not found" on plain lookups stays an
//! absent value.

use crate::messaging::{
    domain::{Message, MessageId, MessageLimit, User, UserId, UserPatch, ValidationError},
    ports::repository::{RepositoryError, UserRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Domain validation failed; the caller can retry with corrected input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A message operation referenced a user that does not exist.
    #[error("user not found: {0}")]
    UnknownUser(UserId),

    /// A user attempted to message themself.
    ///
    /// Kept distinct from validation failure so the boundary layer can give
    /// it its own response.
    #[error("author and recipient must be different users")]
    SelfMessage,
}

/// Result type for directory service operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// User directory and message exchange orchestration.
///
/// Constructed explicitly with its repository and clock; lifecycle belongs
/// to the application context, never to import time.
#[derive(Clone)]
pub struct DirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> DirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when the name or email is
    /// rejected, or [`DirectoryError::Repository`] when persistence fails.
    pub async fn register_user(&self, name: &str, email: &str) -> DirectoryResult<User> {
        let user = User::new(name, email)?;
        self.repository.create_user(&user).await?;
        Ok(user)
    }

    /// Retrieves a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when the lookup fails.
    pub async fn fetch_user(&self, id: UserId) -> DirectoryResult<Option<User>> {
        Ok(self.repository.find_user(id).await?)
    }

    /// Returns all users; an empty list is a valid state.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when the query fails.
    pub async fn list_users(&self) -> DirectoryResult<Vec<User>> {
        Ok(self.repository.list_users().await?)
    }

    /// Applies a partial update to a user.
    ///
    /// Absent or empty fields keep their stored value. Returns `None` when
    /// no user matches the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when a present field fails
    /// validation, or [`DirectoryError::Repository`] when persistence fails.
    pub async fn edit_user(
        &self,
        id: UserId,
        name: Option<&str>,
        email: Option<&str>,
    ) -> DirectoryResult<Option<User>> {
        let patch = UserPatch::new(name, email)?;
        Ok(self.repository.update_user(id, &patch).await?)
    }

    /// Deletes a user; returns `true` when a record was removed.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Repository`] when the delete fails.
    pub async fn remove_user(&self, id: UserId) -> DirectoryResult<bool> {
        Ok(self.repository.delete_user(id).await?)
    }

    /// Sends a message from one user to another.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SelfMessage`] when author and recipient
    /// coincide, [`DirectoryError::UnknownUser`] when either does not exist,
    /// [`DirectoryError::Validation`] when the content is rejected, or
    /// [`DirectoryError::Repository`] when persistence fails.
    pub async fn send_message(
        &self,
        author_id: UserId,
        recipient_id: UserId,
        content: &str,
    ) -> DirectoryResult<Message> {
        if author_id == recipient_id {
            return Err(DirectoryError::SelfMessage);
        }
        self.require_user(author_id).await?;
        self.require_user(recipient_id).await?;

        let message = Message::new(author_id, recipient_id, content, self.clock.as_ref())?;
        self.repository.store_message(&message).await?;
        Ok(message)
    }

    /// Returns messages sent to a recipient, oldest first.
    ///
    /// A missing `limit` defaults to [`MessageLimit::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownUser`] when the recipient does not
    /// exist, [`DirectoryError::Validation`] when the limit lies outside
    /// [1, 100], or [`DirectoryError::Repository`] when the query fails.
    pub async fn fetch_messages(
        &self,
        recipient_id: UserId,
        limit: Option<u32>,
    ) -> DirectoryResult<Vec<Message>> {
        self.require_user(recipient_id).await?;
        let bound = limit.map(MessageLimit::new).transpose()?.unwrap_or_default();
        Ok(self
            .repository
            .messages_for_recipient(recipient_id, bound)
            .await?)
    }

    /// Deletes a message addressed to the recipient.
    ///
    /// Returns `true` only when a message matched both the identifier and
    /// the recipient.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownUser`] when the recipient does not
    /// exist, or [`DirectoryError::Repository`] when the delete fails.
    pub async fn remove_message(
        &self,
        recipient_id: UserId,
        message_id: MessageId,
    ) -> DirectoryResult<bool> {
        self.require_user(recipient_id).await?;
        Ok(self
            .repository
            .delete_message(recipient_id, message_id)
            .await?)
    }

    async fn require_user(&self, id: UserId) -> DirectoryResult<()> {
        if self.repository.find_user(id).await?.is_none() {
            return Err(DirectoryError::UnknownUser(id));
        }
        Ok(())
    }
}
