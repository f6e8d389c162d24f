use super::*;

/// Tests seeding the default groups into an empty table.
///
/// Expected: Ok with every default group inserted
#[tokio::test]
async fn inserts_all_defaults_into_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let inserted = repo.insert_missing(default_groups()).await?;

    assert_eq!(inserted, 13);
    let membro = repo.find_by_internal_name("Membro").await?.expect("seeded");
    assert_eq!(membro.display_name, "§7Membro");
    assert_eq!(membro.permissions.as_deref(), Some(""));

    Ok(())
}

/// Tests seeding twice.
///
/// Verifies that existing groups are neither duplicated nor overwritten.
///
/// Expected: Ok with nothing inserted on the second run and edits kept
#[tokio::test]
async fn keeps_existing_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .internal_name("Admin")
        .display_name("§cOwner")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    assert_eq!(repo.insert_missing(default_groups()).await?, 12);
    assert_eq!(repo.insert_missing(default_groups()).await?, 0);

    let admin = repo.find_by_internal_name("Admin").await?.expect("exists");
    assert_eq!(admin.display_name, "§cOwner");
    assert_eq!(entity::prelude::Group::find().count(db).await?, 13);

    Ok(())
}
