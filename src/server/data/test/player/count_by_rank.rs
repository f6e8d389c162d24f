use super::*;

/// Tests counting accounts that reference a rank.
///
/// Expected: Ok with the number of accounts holding the rank
#[tokio::test]
async fn counts_accounts_with_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).rank("Gold").build().await?;
    AccountFactory::new(db).rank("Gold").build().await?;
    AccountFactory::new(db).rank("Iron").build().await?;

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.count_by_rank("Gold").await?, 2);
    assert_eq!(repo.count_by_rank("Admin").await?, 0);

    Ok(())
}
