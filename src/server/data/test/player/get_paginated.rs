use super::*;

/// Tests pagination over accounts.
///
/// Verifies that pages are cut at the requested size, ordered by most recent login,
/// and that the total counts every matching account.
///
/// Expected: Ok with the requested page and total
#[tokio::test]
async fn returns_page_ordered_by_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 1..=5 {
        AccountFactory::new(db)
            .name(format!("Player{}", i))
            .last_login(1_700_000_000 + i)
            .build()
            .await?;
    }

    let repo = PlayerRepository::new(db);
    let (players, total) = repo.get_paginated(&PlayerFilter::default(), 0, 2).await?;

    assert_eq!(total, 5);
    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Player5", "Player4"]);

    let (players, _) = repo.get_paginated(&PlayerFilter::default(), 2, 2).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Player1");

    Ok(())
}

/// Tests searching by name or by the textual identity value.
///
/// Expected: Ok with only the matching accounts
#[tokio::test]
async fn searches_name_and_created() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db)
        .created(111_222)
        .name("Notch")
        .build()
        .await?;
    AccountFactory::new(db)
        .created(333_444)
        .name("Jeb")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    let by_name = PlayerFilter {
        search: Some("otc".to_string()),
        rank: None,
    };
    let (players, total) = repo.get_paginated(&by_name, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(players[0].name, "Notch");

    let by_created = PlayerFilter {
        search: Some("3344".to_string()),
        rank: None,
    };
    let (players, _) = repo.get_paginated(&by_created, 0, 10).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, 333_444);

    Ok(())
}

/// Tests filtering by exact rank.
///
/// Expected: Ok with accounts of that rank only
#[tokio::test]
async fn filters_by_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).rank("Gold").build().await?;
    AccountFactory::new(db).rank("Gold").build().await?;
    AccountFactory::new(db).rank("Iron").build().await?;

    let repo = PlayerRepository::new(db);
    let filter = PlayerFilter {
        search: None,
        rank: Some("Gold".to_string()),
    };
    let (players, total) = repo.get_paginated(&filter, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(players.iter().all(|p| p.rank.as_deref() == Some("Gold")));

    Ok(())
}

/// Tests a page index whose offset cannot be represented.
///
/// Verifies that `page * per_page` overflowing yields an empty page instead of a
/// panic, with the total still counted.
///
/// Expected: Ok with no players and the full total
#[tokio::test]
async fn unaddressable_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).build().await?;

    let repo = PlayerRepository::new(db);
    let (players, total) = repo
        .get_paginated(&PlayerFilter::default(), 4_000_000_000_000_000_000, 10)
        .await?;

    assert_eq!(total, 1);
    assert!(players.is_empty());

    Ok(())
}
