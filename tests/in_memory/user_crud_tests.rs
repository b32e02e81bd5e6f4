//! User lifecycle tests for [`InMemoryUserRepository`].
//!
//! Covers uniqueness on creation, absent-result semantics for lookups and
//! deletes, patch merge policy, and listing determinism.
//!
//! [`InMemoryUserRepository`]: courier::messaging::adapters::memory::InMemoryUserRepository

use crate::in_memory::helpers::{repo, seed_user};
use courier::messaging::{
    adapters::memory::InMemoryUserRepository,
    domain::{User, UserId, UserPatch},
    ports::repository::{RepositoryError, UserRepository},
};
use rstest::rstest;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creating_a_duplicate_id_is_a_conflict(repo: InMemoryUserRepository) -> TestResult {
    let ann = seed_user(&repo, "Ann", "ann@gmail.com").await?;
    let rep = ann.to_representation();

    // Same id, different field values: still a primary-key conflict.
    let twin = User::from_existing(&rep.id, "Annette", "ann@mail.ru")?;
    let result = repo.create_user(&twin).await;

    assert!(matches!(
        result,
        Err(RepositoryError::DuplicateUser(id)) if id == ann.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_nonexistent_user_returns_false(repo: InMemoryUserRepository) -> TestResult {
    assert!(!repo.delete_user(UserId::new()).await?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_user_becomes_absent(repo: InMemoryUserRepository) -> TestResult {
    let ann = seed_user(&repo, "Ann", "ann@gmail.com").await?;

    assert!(repo.delete_user(ann.id()).await?);
    assert!(repo.find_user(ann.id()).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_patch_name_does_not_erase_the_stored_name(
    repo: InMemoryUserRepository,
) -> TestResult {
    let ann = seed_user(&repo, "Ann", "ann@gmail.com").await?;

    // The falsy-field policy: an empty string keeps the stored value. Easy
    // to invert accidentally, so verified explicitly.
    let patch = UserPatch::new(Some(""), Some("ann@outlook.com"))?;
    let updated = repo.update_user(ann.id(), &patch).await?.ok_or("user exists")?;

    assert_eq!(updated.name(), "Ann");
    assert_eq!(updated.email().to_string(), "ann@outlook.com");

    let reloaded = repo.find_user(ann.id()).await?.ok_or("user exists")?;
    assert_eq!(reloaded.name(), "Ann");
    assert_eq!(reloaded.email().to_string(), "ann@outlook.com");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_a_nonexistent_user_is_absent(repo: InMemoryUserRepository) -> TestResult {
    let patch = UserPatch::new(Some("Zoe"), None)?;
    assert!(repo.update_user(UserId::new(), &patch).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_listing_is_a_valid_state(repo: InMemoryUserRepository) -> TestResult {
    assert!(repo.list_users().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_ordered_by_id(repo: InMemoryUserRepository) -> TestResult {
    seed_user(&repo, "Ann", "ann@gmail.com").await?;
    seed_user(&repo, "Bob", "bob@mail.ru").await?;
    seed_user(&repo, "Cat", "cat@outlook.com").await?;

    let listed = repo.list_users().await?;
    assert_eq!(listed.len(), 3);

    let ids: Vec<_> = listed.iter().map(|user| user.id().into_inner()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    Ok(())
}
