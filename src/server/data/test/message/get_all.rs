use super::*;

/// Tests listing messages.
///
/// Expected: Ok with messages ordered by key
#[tokio::test]
async fn lists_messages_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for key in ["quit", "join", "kick"] {
        factory::message::MessageFactory::new(db)
            .message_key(key)
            .build()
            .await?;
    }

    let repo = MessageRepository::new(db);
    let messages = repo.get_all().await?;

    let keys: Vec<&str> = messages.iter().map(|m| m.message_key.as_str()).collect();
    assert_eq!(keys, vec!["join", "kick", "quit"]);

    Ok(())
}

/// Tests fetching a key that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);

    assert!(repo.get_by_key("missing").await?.is_none());

    Ok(())
}
