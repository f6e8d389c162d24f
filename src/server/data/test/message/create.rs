use super::*;

/// Tests creating a message.
///
/// Expected: Ok with the stored message retrievable by key
#[tokio::test]
async fn creates_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParams {
            message_key: "join.welcome".to_string(),
            content: "&aWelcome %%s!".to_string(),
            description: "Sent on join".to_string(),
        })
        .await?;

    assert_eq!(message.message_key, "join.welcome");
    assert_eq!(message.description.as_deref(), Some("Sent on join"));

    let stored = repo.get_by_key("join.welcome").await?;
    assert_eq!(stored, Some(message));

    Ok(())
}

/// Tests creating a message with an existing key.
///
/// Expected: Err from the unique constraint on `message_key`
#[tokio::test]
async fn rejects_duplicate_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::message::MessageFactory::new(db)
        .message_key("join.welcome")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    assert!(repo.key_exists("join.welcome").await?);

    let result = repo
        .create(CreateMessageParams {
            message_key: "join.welcome".to_string(),
            content: "Hi".to_string(),
            description: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
