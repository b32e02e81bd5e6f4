//! Domain types for the messaging subsystem.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. Validation happens entirely inside construction: an invalid
//! input never produces an entity.

mod email;
mod error;
mod ids;
mod message;
mod user;

pub mod rules;

pub use email::EmailAddress;
pub use error::ValidationError;
pub use ids::{MessageId, UserId};
pub use message::{Message, MessageRepresentation, PersistedMessageData};
pub use rules::MessageLimit;
pub use user::{PersistedUserData, User, UserPatch, UserRepresentation};
