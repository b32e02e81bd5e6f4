//! `PostgreSQL` repository implementation for user and message storage.

use super::{
    models::{MessageRow, NewMessageRow, NewUserRow, UserRow},
    schema::{messages, users},
};
use crate::messaging::{
    domain::{
        EmailAddress, Message, MessageId, MessageLimit, PersistedMessageData, PersistedUserData,
        User, UserId, UserPatch,
    },
    ports::repository::{RepositoryError, RepositoryResult, UserRepository},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the messaging adapters.
pub type MessagingPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user and message repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: MessagingPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: &User) -> RepositoryResult<()> {
        let user_id = user.id();
        let new_row = user_to_new_row(user);

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::DuplicateUser(user_id)
                    }
                    _ => RepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_user(&self, id: UserId) -> RepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.run_blocking(|connection| {
            let rows = users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn update_user(&self, id: UserId, patch: &UserPatch) -> RepositoryResult<Option<User>> {
        let patch = patch.clone();
        self.run_blocking(move |connection| {
            connection.transaction::<_, RepositoryError, _>(|txn| {
                let row = users::table
                    .filter(users::id.eq(id.into_inner()))
                    .select(UserRow::as_select())
                    .first::<UserRow>(txn)
                    .optional()?;

                let Some(current_row) = row else {
                    return Ok(None);
                };
                let updated = row_to_user(current_row)?.apply_patch(&patch);

                diesel::update(users::table.filter(users::id.eq(id.into_inner())))
                    .set((
                        users::name.eq(updated.name().to_owned()),
                        users::email.eq(updated.email().to_string()),
                    ))
                    .execute(txn)?;

                Ok(Some(updated))
            })
        })
        .await
    }

    async fn delete_user(&self, id: UserId) -> RepositoryResult<bool> {
        self.run_blocking(move |connection| {
            // Messages referencing the user stay behind; cascade deletion is
            // an open product decision.
            let removed = diesel::delete(users::table.filter(users::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn store_message(&self, message: &Message) -> RepositoryResult<()> {
        let new_row = message_to_new_row(message);
        self.run_blocking(move |connection| {
            diesel::insert_into(messages::table)
                .values(&new_row)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn messages_for_recipient(
        &self,
        recipient_id: UserId,
        limit: MessageLimit,
    ) -> RepositoryResult<Vec<Message>> {
        self.run_blocking(move |connection| {
            let rows = messages::table
                .filter(messages::recipient_id.eq(recipient_id.into_inner()))
                .order((messages::sent_at.asc(), messages::id.asc()))
                .limit(i64::from(limit.value()))
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_message).collect())
        })
        .await
    }

    async fn delete_message(
        &self,
        recipient_id: UserId,
        message_id: MessageId,
    ) -> RepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(
                messages::table.filter(
                    messages::id
                        .eq(message_id.into_inner())
                        .and(messages::recipient_id.eq(recipient_id.into_inner())),
                ),
            )
            .execute(connection)
            .map_err(RepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn user_to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().into_inner(),
        name: user.name().to_owned(),
        email: user.email().to_string(),
    }
}

fn row_to_user(row: UserRow) -> RepositoryResult<User> {
    let UserRow { id, name, email } = row;
    // Stored emails were validated at construction; a parse failure here
    // means the row was corrupted outside the application.
    let address = EmailAddress::parse(&email).map_err(RepositoryError::persistence)?;
    Ok(User::from_persisted(PersistedUserData {
        id: UserId::from_uuid(id),
        name,
        email: address,
    }))
}

fn message_to_new_row(message: &Message) -> NewMessageRow {
    NewMessageRow {
        id: message.id().into_inner(),
        author_id: message.author_id().into_inner(),
        recipient_id: message.recipient_id().into_inner(),
        content: message.content().to_owned(),
        sent_at: message.timestamp(),
    }
}

fn row_to_message(row: MessageRow) -> Message {
    let MessageRow {
        id,
        author_id,
        recipient_id,
        content,
        sent_at,
    } = row;
    Message::from_persisted(PersistedMessageData {
        id: MessageId::from_uuid(id),
        author_id: UserId::from_uuid(author_id),
        recipient_id: UserId::from_uuid(recipient_id),
        content,
        timestamp: sent_at,
    })
}
