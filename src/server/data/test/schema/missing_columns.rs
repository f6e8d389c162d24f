use super::*;

/// Tests the table check on an empty database.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountSchemaRepository::new(db);

    assert!(!repo.table_exists().await?);

    Ok(())
}

/// Tests the column check on a complete table.
///
/// Expected: Ok with no missing columns
#[tokio::test]
async fn accepts_complete_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountSchemaRepository::new(db);

    assert!(repo.table_exists().await?);
    assert!(repo.missing_columns().await?.is_empty());

    Ok(())
}

/// Tests the column check on a table lacking required columns.
///
/// Expected: Ok listing the missing columns
#[tokio::test]
async fn lists_missing_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared("CREATE TABLE account (created BIGINT PRIMARY KEY, name TEXT)")
        .await?;

    let repo = AccountSchemaRepository::new(db);

    assert_eq!(
        repo.missing_columns().await?,
        vec!["rank".to_string(), "lastlogin".to_string()]
    );

    Ok(())
}
