//! Player domain models and parameters.
//!
//! Players are rows of the game server's `account` table. The table has no surrogate
//! key; the numeric `created` column identifies an account.

use crate::model::player::{PaginationDto, PlayerDto, PlayerListDto, PlayerRankDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Value of the `created` column.
    pub id: i64,
    pub name: String,
    pub rank: Option<String>,
    pub tag: Option<String>,
    pub last_login: Option<i64>,
}

impl Player {
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.created,
            name: entity.name,
            rank: entity.rank,
            tag: entity.tag,
            last_login: entity.lastlogin,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            rank: self.rank,
            tag: self.tag,
            last_login: self.last_login,
            created_at: self.id,
        }
    }
}

/// Filters for listing players.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    /// Substring matched against the name or the textual `created` value.
    pub search: Option<String>,
    /// Exact rank to match.
    pub rank: Option<String>,
}

/// One page of players along with the ranks present in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPlayers {
    pub players: Vec<Player>,
    /// One-based page number.
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
    pub ranks: Vec<String>,
}

impl PaginatedPlayers {
    pub fn into_dto(self) -> PlayerListDto {
        PlayerListDto {
            players: self.players.into_iter().map(Player::into_dto).collect(),
            pagination: PaginationDto {
                page: self.page,
                limit: self.limit,
                total: self.total,
                pages: self.pages,
            },
            groups: self.ranks,
        }
    }
}

/// Partial update of an account. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePlayerParams {
    pub id: i64,
    pub name: Option<String>,
    pub rank: Option<String>,
}

impl UpdatePlayerParams {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rank.is_none()
    }
}

/// Rank and tag written to an account by a rank update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRank {
    pub id: i64,
    pub rank: String,
    pub tag: String,
}

impl PlayerRank {
    pub fn into_dto(self) -> PlayerRankDto {
        PlayerRankDto {
            id: self.id,
            rank: self.rank,
            tag: self.tag,
        }
    }
}
