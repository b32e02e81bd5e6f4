//! Orchestration services consumed by the HTTP boundary layer.

pub mod directory;

pub use directory::{DirectoryError, DirectoryResult, DirectoryService};
