//! Message storage tests for [`PostgresUserRepository`].
//!
//! Covers `(sent_at, id)` listing order, limit application, and deletion
//! scoped to the matching recipient.
//!
//! [`PostgresUserRepository`]: courier::messaging::adapters::postgres::PostgresUserRepository

use crate::postgres::helpers::{BoxError, setup_repository};
use chrono::Utc;
use courier::messaging::{
    domain::{Message, MessageId, MessageLimit, PersistedMessageData, UserId},
    ports::repository::UserRepository,
};
use mockable::DefaultClock;

type TestResult = Result<(), BoxError>;

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn store_list_delete_round_trip() -> TestResult {
    let repo = setup_repository().await?;
    let clock = DefaultClock;
    let author = UserId::new();
    let recipient = UserId::new();

    let message = Message::new(author, recipient, "hi", &clock)?;
    repo.store_message(&message).await?;

    let listed = repo
        .messages_for_recipient(recipient, MessageLimit::default())
        .await?;
    assert_eq!(listed, vec![message.clone()]);

    assert!(repo.delete_message(recipient, message.id()).await?);
    let after = repo
        .messages_for_recipient(recipient, MessageLimit::default())
        .await?;
    assert!(after.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn deletion_requires_the_matching_recipient() -> TestResult {
    let repo = setup_repository().await?;
    let clock = DefaultClock;
    let recipient = UserId::new();
    let other = UserId::new();

    let message = Message::new(UserId::new(), recipient, "for one reader", &clock)?;
    repo.store_message(&message).await?;

    // The row exists, but under a different recipient.
    assert!(!repo.delete_message(other, message.id()).await?);
    assert!(!repo.delete_message(recipient, MessageId::new()).await?);

    assert!(repo.delete_message(recipient, message.id()).await?);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn equal_timestamps_break_ties_by_id() -> TestResult {
    let repo = setup_repository().await?;
    let author = UserId::new();
    let recipient = UserId::new();
    let stamp = Utc::now();

    let mut ids = vec![MessageId::new(), MessageId::new()];
    ids.sort_unstable_by_key(|id| id.into_inner());
    let (low_id, high_id) = match ids.as_slice() {
        [low, high] => (*low, *high),
        _ => return Err("two ids".into()),
    };

    let build = |id: MessageId, content: &str| {
        Message::from_persisted(PersistedMessageData {
            id,
            author_id: author,
            recipient_id: recipient,
            content: content.to_owned(),
            timestamp: stamp,
        })
    };

    // Inserted high id first; the listing must still come back id-ascending.
    repo.store_message(&build(high_id, "second")).await?;
    repo.store_message(&build(low_id, "first")).await?;

    let listed = repo
        .messages_for_recipient(recipient, MessageLimit::default())
        .await?;
    let listed_ids: Vec<MessageId> = listed.iter().map(Message::id).collect();
    assert_eq!(listed_ids, vec![low_id, high_id]);

    repo.delete_message(recipient, low_id).await?;
    repo.delete_message(recipient, high_id).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires COURIER_TEST_DATABASE_URL"]
async fn limit_bounds_the_listing_oldest_first() -> TestResult {
    let repo = setup_repository().await?;
    let clock = DefaultClock;
    let author = UserId::new();
    let recipient = UserId::new();

    let mut sent = Vec::new();
    for index in 0..3 {
        let message = Message::new(author, recipient, &format!("note {index}"), &clock)?;
        repo.store_message(&message).await?;
        sent.push(message);
    }

    let limit = MessageLimit::new(2)?;
    let listed = repo.messages_for_recipient(recipient, limit).await?;
    let contents: Vec<&str> = listed.iter().map(Message::content).collect();
    assert_eq!(contents, vec!["note 0", "note 1"]);

    for message in &sent {
        repo.delete_message(recipient, message.id()).await?;
    }
    Ok(())
}
