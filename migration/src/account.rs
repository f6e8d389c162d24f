use sea_orm_migration::prelude::*;

/// Columns of the externally owned `account` table.
///
/// The table belongs to the game server and is never created by the migrator, only
/// checked and extended at startup.
#[derive(DeriveIden)]
pub enum Account {
    Table,
    Created,
    Name,
    Rank,
    Tag,
    Lastlogin,
}
