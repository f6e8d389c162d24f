use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::player::MAX_PAGE_SIZE,
    server::{
        data::{group::GroupRepository, player::PlayerRepository},
        error::AppError,
        model::{
            player::{PaginatedPlayers, Player, PlayerFilter, PlayerRank, UpdatePlayerParams},
            rank::{RankResolution, HARD_RANKS},
        },
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists players matching the filter.
    ///
    /// # Arguments
    /// - `filter` - Search and rank filters
    /// - `page` - One-based page number; 0 is treated as 1
    /// - `limit` - Players per page, clamped to `1..=MAX_PAGE_SIZE`
    pub async fn get_paginated(
        &self,
        filter: PlayerFilter,
        page: u64,
        limit: u64,
    ) -> Result<PaginatedPlayers, AppError> {
        let repo = PlayerRepository::new(self.db);

        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);

        let (players, total) = repo.get_paginated(&filter, page - 1, limit).await?;
        let ranks = repo.get_ranks().await?;

        Ok(PaginatedPlayers {
            players,
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
            ranks,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))
    }

    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let repo = PlayerRepository::new(self.db);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))
    }

    /// Resolves a requested rank name and stores the resulting rank and tag.
    ///
    /// # Returns
    /// - `Ok(PlayerRank)` - Values written to the account
    /// - `Err(AppError::BadRequest)` - The requested rank is empty
    /// - `Err(AppError::NotFound)` - No account has this ID
    pub async fn update_rank(&self, id: i64, requested: &str) -> Result<PlayerRank, AppError> {
        if requested.is_empty() {
            return Err(AppError::BadRequest("Rank is required".to_string()));
        }

        let repo = PlayerRepository::new(self.db);
        let group_repo = GroupRepository::new(self.db);

        let group = if HARD_RANKS.contains(&requested) {
            None
        } else {
            group_repo.find_by_internal_name(requested).await?
        };
        let resolution = RankResolution::resolve(requested, group.as_ref());

        if let RankResolution::Unknown(name) = &resolution {
            tracing::warn!("Rank {:?} matches no group, storing it as given", name);
        }

        let player = self.get_by_id(id).await?;
        let (rank, tag) = resolution.apply(player.rank.as_deref());

        if !repo.update_rank(id, &rank, &tag).await? {
            return Err(AppError::NotFound("Player not found".to_string()));
        }

        Ok(PlayerRank { id, rank, tag })
    }

    /// Deletes an account and returns it as it was before deletion.
    pub async fn delete(&self, id: i64) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player = self.get_by_id(id).await?;

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Player not found".to_string()));
        }

        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn hard_rank_sets_rank_and_tag() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let account = factory::account::AccountFactory::new(db)
            .rank("Membro")
            .build()
            .await
            .unwrap();

        let service = PlayerService::new(db);
        let result = service.update_rank(account.created, "Mod+").await.unwrap();

        assert_eq!(result.rank, "Mod+");
        assert_eq!(result.tag, "Mod+");
        let stored = service.get_by_id(account.created).await.unwrap();
        assert_eq!(stored.rank.as_deref(), Some("Mod+"));
        assert_eq!(stored.tag.as_deref(), Some("Mod+"));
    }

    #[tokio::test]
    async fn tag_group_keeps_rank_and_sets_prefix() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::group::GroupFactory::new(db)
            .internal_name("Youtuber")
            .prefix("§c[YT] ")
            .permissions("tag.youtuber")
            .build()
            .await
            .unwrap();
        let account = factory::account::AccountFactory::new(db)
            .rank("Gold")
            .build()
            .await
            .unwrap();

        let service = PlayerService::new(db);
        let result = service
            .update_rank(account.created, "Youtuber")
            .await
            .unwrap();

        assert_eq!(result.rank, "Gold");
        assert_eq!(result.tag, "§c[YT] ");
    }

    #[tokio::test]
    async fn tag_group_defaults_rank_for_players_without_one() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::group::GroupFactory::new(db)
            .internal_name("Streamer")
            .prefix("")
            .permissions("tag.streamer")
            .build()
            .await
            .unwrap();
        let account = factory::account::AccountFactory::new(db)
            .no_rank()
            .build()
            .await
            .unwrap();

        let service = PlayerService::new(db);
        let result = service
            .update_rank(account.created, "Streamer")
            .await
            .unwrap();

        assert_eq!(result.rank, "Membro");
        assert_eq!(result.tag, "Streamer");
    }

    #[tokio::test]
    async fn empty_rank_is_rejected() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = PlayerService::new(db);

        assert!(matches!(
            service.update_rank(1, "").await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn rank_name_is_matched_exactly() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let account = factory::account::AccountFactory::new(db)
            .rank("Membro")
            .build()
            .await
            .unwrap();

        let service = PlayerService::new(db);
        let result = service.update_rank(account.created, " Gold ").await.unwrap();

        assert_eq!(result.rank, " Gold ");
        assert_eq!(result.tag, " Gold ");
    }

    #[tokio::test]
    async fn rank_update_of_unknown_player_is_not_found() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = PlayerService::new(db);

        assert!(matches!(
            service.update_rank(1, "Gold").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_without_fields_is_rejected() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = PlayerService::new(db);

        let result = service
            .update(UpdatePlayerParams {
                id: 1,
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn paginates_with_one_based_pages() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        for i in 0..3 {
            factory::account::AccountFactory::new(db)
                .last_login(1_700_000_000 + i)
                .build()
                .await
                .unwrap();
        }

        let service = PlayerService::new(db);
        let page = service
            .get_paginated(PlayerFilter::default(), 2, 2)
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.pages, 2);
        assert_eq!(page.players.len(), 1);
        assert_eq!(page.ranks, vec!["Membro".to_string()]);
    }

    #[tokio::test]
    async fn page_beyond_addressable_range_is_empty() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_account(db).await.unwrap();

        let service = PlayerService::new(db);
        let page = service
            .get_paginated(PlayerFilter::default(), 4_000_000_000_000_000_000, 10)
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert!(page.players.is_empty());
    }

    #[tokio::test]
    async fn limit_is_capped() {
        let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_account(db).await.unwrap();

        let service = PlayerService::new(db);
        let page = service
            .get_paginated(PlayerFilter::default(), 1, u64::MAX)
            .await
            .unwrap();

        assert_eq!(page.limit, MAX_PAGE_SIZE);
        assert_eq!(page.players.len(), 1);
    }
}
