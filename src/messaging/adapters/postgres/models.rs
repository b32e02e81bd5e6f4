//! Diesel row models for user and message persistence.

use super::schema::{messages, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Email address in `local@domain` form.
    pub email: String,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Email address in `local@domain` form.
    pub email: String,
}

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Identifier of the sending user.
    pub author_id: uuid::Uuid,
    /// Identifier of the receiving user.
    pub recipient_id: uuid::Uuid,
    /// Message content.
    pub content: String,
    /// Creation timestamp.
    pub sent_at: DateTime<Utc>,
}

/// Insert model for message records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Identifier of the sending user.
    pub author_id: uuid::Uuid,
    /// Identifier of the receiving user.
    pub recipient_id: uuid::Uuid,
    /// Message content.
    pub content: String,
    /// Creation timestamp.
    pub sent_at: DateTime<Utc>,
}
