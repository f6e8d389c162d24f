use super::*;

/// Tests updating a group.
///
/// Verifies that every editable field is replaced.
///
/// Expected: Ok(Some) with the updated group
#[tokio::test]
async fn updates_group_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::GroupFactory::new(db)
        .internal_name("Vip")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(UpdateGroupParams {
            id: group.id,
            internal_name: "VipPlus".to_string(),
            display_name: "§aVip+".to_string(),
            prefix: "§a[VIP+] ".to_string(),
            visualization: "Vip+".to_string(),
            permissions: "tag.vipplus".to_string(),
        })
        .await?
        .expect("group exists");

    assert_eq!(updated.id, group.id);
    assert_eq!(updated.internal_name, "VipPlus");
    assert_eq!(updated.display_name, "§aVip+");
    assert_eq!(updated.prefix.as_deref(), Some("§a[VIP+] "));
    assert!(updated.is_tag());

    Ok(())
}

/// Tests updating a group with unchanged values.
///
/// Verifies that an update writing the stored values still reports the group.
///
/// Expected: Ok(Some) with the same group
#[tokio::test]
async fn unchanged_update_still_returns_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create(params("Vip")).await?;

    let result = repo
        .update(UpdateGroupParams {
            id: group.id,
            internal_name: group.internal_name.clone(),
            display_name: group.display_name.clone(),
            prefix: "§6".to_string(),
            visualization: "Vip".to_string(),
            permissions: "rank.vip".to_string(),
        })
        .await?;

    assert_eq!(result.map(|g| g.internal_name), Some("Vip".to_string()));

    Ok(())
}

/// Tests updating a nonexistent group.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let result = repo
        .update(UpdateGroupParams {
            id: 42,
            internal_name: "Ghost".to_string(),
            display_name: "Ghost".to_string(),
            prefix: String::new(),
            visualization: String::new(),
            permissions: String::new(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
