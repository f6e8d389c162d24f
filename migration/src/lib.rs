pub use sea_orm_migration::prelude::*;

mod account;
mod m20251020_000001_create_groups_table;
mod m20251020_000002_create_messages_table;

pub use account::Account;
pub use m20251020_000001_create_groups_table::Groups;
pub use m20251020_000002_create_messages_table::Messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_groups_table::Migration),
            Box::new(m20251020_000002_create_messages_table::Migration),
        ]
    }
}
