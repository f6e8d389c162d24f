use super::*;

/// Tests deleting a message by key.
///
/// Expected: Ok(true) and the key is free again; Ok(false) for a second delete
#[tokio::test]
async fn deletes_message_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::message::MessageFactory::new(db)
        .message_key("quit")
        .build()
        .await?;

    let repo = MessageRepository::new(db);

    assert!(repo.delete("quit").await?);
    assert!(!repo.key_exists("quit").await?);
    assert!(!repo.delete("quit").await?);

    Ok(())
}
