//! User accounts and message exchange for Courier.
//!
//! This module implements the core of the service: the rules that decide
//! whether a user or message is well-formed, entity construction that can
//! never produce an invalid record, and the repository operations that
//! enforce uniqueness, existence, and ownership around them.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::User`], [`domain::Message`])
//!   and validation rules ([`domain::rules`])
//! - **Ports**: Abstract trait interfaces ([`ports::repository::UserRepository`])
//! - **Adapters**: Concrete implementations
//!   ([`adapters::memory::InMemoryUserRepository`],
//!   [`adapters::postgres::PostgresUserRepository`])
//! - **Services**: Boundary-facing orchestration
//!   ([`services::directory::DirectoryService`])
//!
//! # Example
//!
//! ```
//! use courier::messaging::domain::{Message, User};
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let ann = User::new("Ann", "ann@gmail.com").expect("valid user");
//! let bob = User::new("Bob", "bob@mail.ru").expect("valid user");
//! let message = Message::new(ann.id(), bob.id(), "hello", &clock)
//!     .expect("valid message");
//!
//! assert_eq!(message.recipient_id(), bob.id());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
