use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, player::PlayerRepository},
    error::AppError,
    model::group::{default_groups, CreateGroupParams, Group, UpdateGroupParams},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        let repo = GroupRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Creates a group, rejecting internal names already in use.
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        if repo.internal_name_taken(&params.internal_name, None).await? {
            return Err(AppError::BadRequest(
                "A group with this internal name already exists".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    /// Updates a group, rejecting internal names held by another group.
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        if repo
            .internal_name_taken(&params.internal_name, Some(params.id))
            .await?
        {
            return Err(AppError::BadRequest(
                "Another group already uses this internal name".to_string(),
            ));
        }

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Deletes a group unless an account still holds it as rank.
    ///
    /// # Returns
    /// - `Ok(Group)` - The deleted group
    /// - `Err(AppError::NotFound)` - No group has this ID
    /// - `Err(AppError::BadRequest)` - At least one account references the group
    pub async fn delete(&self, id: i32) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);
        let player_repo = PlayerRepository::new(self.db);

        let group = self.get_by_id(id).await?;

        let holders = player_repo.count_by_rank(&group.internal_name).await?;
        if holders > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete this group while {} player(s) use it",
                holders
            )));
        }

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        Ok(group)
    }

    /// Inserts the default rank groups that are missing.
    pub async fn seed_defaults(&self) -> Result<usize, AppError> {
        let repo = GroupRepository::new(self.db);

        let inserted = repo.insert_missing(default_groups()).await?;
        tracing::info!("Seeded {} missing default group(s)", inserted);

        Ok(inserted)
    }
}
