use super::*;

/// Tests deleting an account.
///
/// Expected: Ok(true) then Ok(false) once the account is gone
#[tokio::test]
async fn deletes_account_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db).build().await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.delete(account.created).await?);
    assert!(repo.get_by_id(account.created).await?.is_none());
    assert!(!repo.delete(account.created).await?);

    Ok(())
}
