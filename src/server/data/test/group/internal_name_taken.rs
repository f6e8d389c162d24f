use super::*;

/// Tests the internal name check against other groups.
///
/// Verifies that a group's own name does not count as taken when it is excluded, while
/// another group's name does.
///
/// Expected: Ok with the matching flags
#[tokio::test]
async fn excludes_the_group_being_edited() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vip = factory::group::GroupFactory::new(db)
        .internal_name("Vip")
        .build()
        .await?;
    let mvp = factory::group::GroupFactory::new(db)
        .internal_name("Mvp")
        .build()
        .await?;

    let repo = GroupRepository::new(db);

    assert!(repo.internal_name_taken("Vip", None).await?);
    assert!(!repo.internal_name_taken("Vip", Some(vip.id)).await?);
    assert!(repo.internal_name_taken("Vip", Some(mvp.id)).await?);
    assert!(!repo.internal_name_taken("Legend", None).await?);

    Ok(())
}
