use super::*;

/// Tests adding the tag column to a table that lacks it.
///
/// Expected: Ok(true) on the first call, Ok(false) afterwards
#[tokio::test]
async fn adds_tag_column_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_legacy_account_table(db).await?;

    let repo = AccountSchemaRepository::new(db);

    assert!(repo.ensure_tag_column().await?);
    assert!(!repo.ensure_tag_column().await?);

    Ok(())
}
