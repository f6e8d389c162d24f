use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::player::{Player, PlayerFilter, UpdatePlayerParams};

/// Repository over the game server's `account` table.
///
/// Accounts are never inserted here; the game server creates them when a player first
/// joins.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn filtered(filter: &PlayerFilter) -> Select<entity::prelude::Account> {
        let mut query = entity::prelude::Account::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::account::Column::Name.contains(search))
                    .add(Expr::cust_with_values(
                        "CAST(`created` AS CHAR) LIKE ?",
                        [format!("%{}%", search)],
                    )),
            );
        }

        if let Some(rank) = filter.rank.as_deref().filter(|r| !r.is_empty()) {
            query = query.filter(entity::account::Column::Rank.eq(rank));
        }

        query
    }

    /// Gets one page of players matching the filter, most recent login first.
    ///
    /// # Arguments
    /// - `filter` - Search and rank filters
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of players per page, at least 1
    ///
    /// # Returns
    /// - `Ok((players, total))` - Players of the page and the number of matching players
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &PlayerFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Player>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::account::Column::Lastlogin)
            .paginate(self.db, per_page.max(1));

        let total = paginator.num_items().await?;

        // An offset past what the database can address matches nothing
        let addressable = page
            .checked_mul(per_page.max(1))
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !addressable {
            return Ok((Vec::new(), total));
        }

        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Player::from_entity).collect(), total))
    }

    /// Gets the distinct ranks held by at least one account, sorted by name.
    pub async fn get_ranks(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Account::find()
            .select_only()
            .column(entity::account::Column::Rank)
            .distinct()
            .filter(entity::account::Column::Rank.is_not_null())
            .order_by_asc(entity::account::Column::Rank)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Counts accounts whose rank equals `rank`.
    pub async fn count_by_rank(&self, rank: &str) -> Result<u64, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Rank.eq(rank))
            .count(self.db)
            .await
    }

    /// Updates the name and/or rank of an account.
    ///
    /// Existence is checked before updating since MySQL reports zero affected rows when
    /// the new values equal the stored ones.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - The account after the update
    /// - `Ok(None)` - No account has this ID
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Option<Player>, DbErr> {
        if self.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        let mut update = entity::prelude::Account::update_many()
            .filter(entity::account::Column::Created.eq(params.id));

        if let Some(name) = params.name {
            update = update.col_expr(entity::account::Column::Name, Expr::value(name));
        }
        if let Some(rank) = params.rank {
            update = update.col_expr(entity::account::Column::Rank, Expr::value(rank));
        }

        update.exec(self.db).await?;

        self.get_by_id(params.id).await
    }

    /// Stores the rank and tag of an account in one statement.
    ///
    /// # Returns
    /// - `Ok(true)` - The account exists and was updated
    /// - `Ok(false)` - No account has this ID
    pub async fn update_rank(&self, id: i64, rank: &str, tag: &str) -> Result<bool, DbErr> {
        if self.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Created.eq(id))
            .col_expr(entity::account::Column::Rank, Expr::value(rank))
            .col_expr(entity::account::Column::Tag, Expr::value(tag))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Deletes an account.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was deleted
    /// - `Ok(false)` - No account has this ID
    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Account::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
