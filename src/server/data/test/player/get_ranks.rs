use super::*;

/// Tests collecting the ranks in use.
///
/// Verifies that ranks are distinct, sorted, and skip accounts without a rank.
///
/// Expected: Ok with the sorted distinct ranks
#[tokio::test]
async fn returns_distinct_sorted_ranks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).rank("Membro").build().await?;
    AccountFactory::new(db).rank("Gold").build().await?;
    AccountFactory::new(db).rank("Membro").build().await?;
    AccountFactory::new(db).no_rank().build().await?;

    let repo = PlayerRepository::new(db);
    let ranks = repo.get_ranks().await?;

    assert_eq!(ranks, vec!["Gold".to_string(), "Membro".to_string()]);

    Ok(())
}
