use super::*;

/// Tests updating a message by key.
///
/// Expected: Ok(Some) with new content and description
#[tokio::test]
async fn updates_content_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::message::MessageFactory::new(db)
        .message_key("join.welcome")
        .content("Hi")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let updated = repo
        .update(UpdateMessageParams {
            message_key: "join.welcome".to_string(),
            content: "&eHello %%s".to_string(),
            description: "Greeting".to_string(),
        })
        .await?
        .expect("message exists");

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.content, "&eHello %%s");
    assert_eq!(updated.description.as_deref(), Some("Greeting"));

    Ok(())
}

/// Tests updating a key that does not exist.
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
    let result = repo
        .update(UpdateMessageParams {
            message_key: "missing".to_string(),
            content: "x".to_string(),
            description: String::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
