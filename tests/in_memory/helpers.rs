//! Shared test helpers for in-memory repository integration tests.

use courier::messaging::{
    adapters::memory::InMemoryUserRepository,
    domain::User,
    ports::repository::UserRepository,
    services::DirectoryService,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Service type exercised by the integration suites.
pub type TestService = DirectoryService<InMemoryUserRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryUserRepository {
    InMemoryUserRepository::new()
}

/// Provides a directory service over a fresh repository.
#[fixture]
pub fn service() -> TestService {
    DirectoryService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(DefaultClock))
}

/// Creates and persists a user directly through the repository.
pub async fn seed_user(
    repo: &InMemoryUserRepository,
    name: &str,
    email: &str,
) -> Result<User, Box<dyn std::error::Error + Send + Sync>> {
    let user = User::new(name, email)?;
    repo.create_user(&user).await?;
    Ok(user)
}
