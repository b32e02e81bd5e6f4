//! In-memory implementation of the [`UserRepository`] port.
//!
//! Provides a simple, thread-safe repository for unit testing without
//! database dependencies. Not suitable for production use.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::messaging::{
    domain::{Message, MessageId, MessageLimit, User, UserId, UserPatch},
    ports::repository::{RepositoryError, RepositoryResult, UserRepository},
};

/// In-memory implementation of [`UserRepository`].
///
/// Thread-safe via internal [`RwLock`]. Cloning shares the underlying
/// state, mirroring how connection pools share a database.
///
/// # Example
///
/// ```
/// use courier::messaging::adapters::memory::InMemoryUserRepository;
///
/// let repo = InMemoryUserRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    users: HashMap<UserId, User>,
    messages: Vec<Message>,
}

fn lock_poisoned(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(io::Error::other(format!("lock poisoned: {err}")))
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored users.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty repository.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.state.read().map(|guard| guard.users.len()).unwrap_or(0)
    }

    /// Returns `true` if no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_count() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &User) -> RepositoryResult<()> {
        let mut guard = self.state.write().map_err(lock_poisoned)?;

        if guard.users.contains_key(&user.id()) {
            return Err(RepositoryError::DuplicateUser(user.id()));
        }

        guard.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_user(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let guard = self.state.read().map_err(lock_poisoned)?;
        Ok(guard.users.get(&id).cloned())
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let guard = self.state.read().map_err(lock_poisoned)?;

        let mut users: Vec<User> = guard.users.values().cloned().collect();
        users.sort_unstable_by_key(|user| user.id().into_inner());
        Ok(users)
    }

    async fn update_user(&self, id: UserId, patch: &UserPatch) -> RepositoryResult<Option<User>> {
        let mut guard = self.state.write().map_err(lock_poisoned)?;

        let Some(current) = guard.users.get(&id).cloned() else {
            return Ok(None);
        };
        let updated = current.apply_patch(patch);
        guard.users.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete_user(&self, id: UserId) -> RepositoryResult<bool> {
        let mut guard = self.state.write().map_err(lock_poisoned)?;
        // Messages addressed to or sent by the user stay behind; cascade
        // deletion is an open product decision.
        Ok(guard.users.remove(&id).is_some())
    }

    async fn store_message(&self, message: &Message) -> RepositoryResult<()> {
        let mut guard = self.state.write().map_err(lock_poisoned)?;

        if guard.messages.iter().any(|stored| stored.id() == message.id()) {
            return Err(RepositoryError::persistence(io::Error::other(format!(
                "message with id {} already exists",
                message.id()
            ))));
        }

        guard.messages.push(message.clone());
        Ok(())
    }

    async fn messages_for_recipient(
        &self,
        recipient_id: UserId,
        limit: MessageLimit,
    ) -> RepositoryResult<Vec<Message>> {
        let guard = self.state.read().map_err(lock_poisoned)?;

        let mut messages: Vec<Message> = guard
            .messages
            .iter()
            .filter(|message| message.recipient_id() == recipient_id)
            .cloned()
            .collect();

        // Stable sort: ties on timestamp keep insertion order.
        messages.sort_by_key(Message::timestamp);

        let bound = usize::try_from(limit.value()).unwrap_or(usize::MAX);
        messages.truncate(bound);
        Ok(messages)
    }

    async fn delete_message(
        &self,
        recipient_id: UserId,
        message_id: MessageId,
    ) -> RepositoryResult<bool> {
        let mut guard = self.state.write().map_err(lock_poisoned)?;

        let position = guard
            .messages
            .iter()
            .position(|message| {
                message.id() == message_id && message.recipient_id() == recipient_id
            });

        let Some(index) = position else {
            return Ok(false);
        };
        guard.messages.remove(index);
        Ok(true)
    }
}
