use super::*;

/// Tests creating a group.
///
/// Verifies that the repository stores every field and fills both timestamps.
///
/// Expected: Ok with the stored group
#[tokio::test]
async fn creates_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create(params("Vip")).await?;

    assert_eq!(group.internal_name, "Vip");
    assert_eq!(group.display_name, "§6Vip");
    assert_eq!(group.prefix.as_deref(), Some("§6"));
    assert_eq!(group.permissions.as_deref(), Some("rank.vip"));
    assert!(group.created_at.is_some());
    assert!(group.updated_at.is_some());

    let stored = repo.get_by_id(group.id).await?;
    assert_eq!(stored, Some(group));

    Ok(())
}

/// Tests creating a group with a duplicate internal name.
///
/// Verifies that the unique constraint on `internal_name` rejects the insert.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_internal_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    repo.create(params("Vip")).await?;

    let result = repo.create(params("Vip")).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Group::find().count(db).await?, 1);

    Ok(())
}

/// Tests listing groups.
///
/// Verifies that groups come back in ID order.
///
/// Expected: Ok with groups ordered by ID
#[tokio::test]
async fn lists_groups_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    repo.create(params("Zeta")).await?;
    repo.create(params("Alpha")).await?;

    let groups = repo.get_all().await?;

    let names: Vec<&str> = groups.iter().map(|g| g.internal_name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);

    Ok(())
}
