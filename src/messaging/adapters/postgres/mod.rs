//! `PostgreSQL` adapter for the [`UserRepository`] port.
//!
//! [`UserRepository`]: crate::messaging::ports::repository::UserRepository

mod models;
mod repository;
pub mod schema;

pub use repository::{MessagingPgPool, PostgresUserRepository};
