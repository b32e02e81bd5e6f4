//! Courier: a user directory and message exchange core.
//!
//! This crate provides the domain model for a small messaging service:
//! validated user accounts, short directed messages between them, and a
//! repository contract enforcing uniqueness and ownership rules over an
//! abstract persistence backend.
//!
//! # Architecture
//!
//! Courier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//! - **Services**: Orchestration consumed by the HTTP boundary layer
//!
//! # Modules
//!
//! - [`messaging`]: User accounts, messages, validation, and persistence

pub mod messaging;
