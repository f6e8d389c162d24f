use super::*;

/// Tests creating the lookup indexes.
///
/// Expected: Ok(3) on the first call, Ok(0) afterwards
#[tokio::test]
async fn creates_missing_indexes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_legacy_account_table(db).await?;

    let repo = AccountSchemaRepository::new(db);
    repo.ensure_tag_column().await?;

    assert_eq!(repo.ensure_indexes().await?, 3);
    assert_eq!(repo.ensure_indexes().await?, 0);

    Ok(())
}
