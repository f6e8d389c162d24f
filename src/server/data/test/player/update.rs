use super::*;

/// Tests renaming an account without touching its rank.
///
/// Expected: Ok(Some) with the new name and the old rank
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db)
        .name("Steve")
        .rank("Gold")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .update(UpdatePlayerParams {
            id: account.created,
            name: Some("Alex".to_string()),
            rank: None,
        })
        .await?
        .expect("account exists");

    assert_eq!(player.name, "Alex");
    assert_eq!(player.rank.as_deref(), Some("Gold"));

    Ok(())
}

/// Tests updating an unknown account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo
        .update(UpdatePlayerParams {
            id: 1,
            name: Some("Ghost".to_string()),
            rank: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
