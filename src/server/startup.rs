use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    service::{group::GroupService, schema::AccountSchemaService},
};

/// Connects to the game server database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connection pool
/// - `Err(AppError::DbErr)` - Failed to connect
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.pool_size).sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!("Connected to database with a pool of {} connections", config.pool_size);

    Ok(db)
}

/// Prepares the database for serving requests.
///
/// Verifies and extends the `account` table, runs pending migrations for the dashboard's
/// own tables, then inserts the default groups that are missing. Any failure aborts
/// startup.
pub async fn prepare_database(db: &DatabaseConnection) -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    AccountSchemaService::new(db).prepare().await?;

    Migrator::up(db, None).await?;

    GroupService::new(db).seed_defaults().await?;

    Ok(())
}
