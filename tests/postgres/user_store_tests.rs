//! User lifecycle tests for [`PostgresUserRepository`].
//!
//! Covers the unique-violation mapping on insert, the transactional patch
//! merge, deletion semantics, and id-ordered listing.
//!
//! [`PostgresUserRepository`]: courier::messaging::adapters::postgres::PostgresUserRepository

use crate::postgres::helpers::{BoxError, seed_user, setup_repository};
use courier::messaging::{
    domain::{User, UserId, UserPatch},
    ports::repository::{RepositoryError, UserRepository},
};

type TestResult = Result<(), BoxError>;

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn creating_a_duplicate_id_is_a_conflict() -> TestResult {
    let repo = setup_repository().await?;
    let ann = seed_user(&repo, "Ann", "ann@gmail.com").await?;
    let rep = ann.to_representation();

    // Same primary key, different field values: the unique violation must
    // surface as a domain conflict, not an opaque persistence error.
    let twin = User::from_existing(&rep.id, "Annette", "ann@mail.ru")?;
    let result = repo.create_user(&twin).await;

    assert!(matches!(
        result,
        Err(RepositoryError::DuplicateUser(id)) if id == ann.id()
    ));

    repo.delete_user(ann.id()).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn patch_merge_keeps_fields_absent_from_the_patch() -> TestResult {
    let repo = setup_repository().await?;
    let ann = seed_user(&repo, "Ann", "ann@gmail.com").await?;

    // Empty string counts as absent: the stored name survives the update.
    let patch = UserPatch::new(Some(""), Some("ann@outlook.com"))?;
    let updated = repo
        .update_user(ann.id(), &patch)
        .await?
        .ok_or("user exists")?;

    assert_eq!(updated.name(), "Ann");
    assert_eq!(updated.email().to_string(), "ann@outlook.com");

    let reloaded = repo.find_user(ann.id()).await?.ok_or("user exists")?;
    assert_eq!(reloaded.name(), "Ann");
    assert_eq!(reloaded.email().to_string(), "ann@outlook.com");

    repo.delete_user(ann.id()).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn updating_a_nonexistent_user_is_absent() -> TestResult {
    let repo = setup_repository().await?;

    let patch = UserPatch::new(Some("Zoe"), None)?;
    let updated = repo.update_user(UserId::new(), &patch).await?;

    assert!(updated.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn delete_reports_whether_a_row_was_removed() -> TestResult {
    let repo = setup_repository().await?;
    let ann = seed_user(&repo, "Ann", "ann@gmail.com").await?;

    assert!(repo.delete_user(ann.id()).await?);
    assert!(!repo.delete_user(ann.id()).await?);
    assert!(repo.find_user(ann.id()).await?.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn listing_orders_users_by_id() -> TestResult {
    let repo = setup_repository().await?;
    let ann = seed_user(&repo, "Ann", "ann@gmail.com").await?;
    let bob = seed_user(&repo, "Bob", "bob@mail.ru").await?;

    // Other suites may share the database, so assert the relative order of
    // this test's own rows rather than the full listing.
    let listed = repo.list_users().await?;
    let positions: Vec<usize> = listed
        .iter()
        .enumerate()
        .filter(|(_, user)| *user == &ann || *user == &bob)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(positions.len(), 2);

    let expected_first = if ann.id().into_inner() < bob.id().into_inner() {
        &ann
    } else {
        &bob
    };
    let first_listed = listed
        .iter()
        .find(|user| *user == &ann || *user == &bob)
        .ok_or("seeded users listed")?;
    assert_eq!(first_listed, expected_first);

    repo.delete_user(ann.id()).await?;
    repo.delete_user(bob.id()).await?;
    Ok(())
}
