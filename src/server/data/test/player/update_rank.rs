use super::*;

/// Tests writing rank and tag together.
///
/// Expected: Ok(true) with both columns stored
#[tokio::test]
async fn stores_rank_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db).rank("Membro").build().await?;

    let repo = PlayerRepository::new(db);
    assert!(repo.update_rank(account.created, "Gold", "Gold").await?);

    let player = repo.get_by_id(account.created).await?.expect("exists");
    assert_eq!(player.rank.as_deref(), Some("Gold"));
    assert_eq!(player.tag.as_deref(), Some("Gold"));

    Ok(())
}

/// Tests writing a rank for an unknown account.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(!repo.update_rank(99, "Gold", "Gold").await?);

    Ok(())
}
