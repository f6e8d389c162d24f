use super::*;

/// Tests deleting a group by ID.
///
/// Expected: Ok(true) and the group no longer exists
#[tokio::test]
async fn deletes_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let deleted = repo.delete(group.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a nonexistent group.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
