//! Port contracts for the messaging subsystem.
//!
//! Ports define infrastructure-agnostic interfaces used by the service
//! layer.

pub mod repository;

pub use repository::{RepositoryError, RepositoryResult, UserRepository};
