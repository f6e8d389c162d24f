//! Group factory for creating test rank and tag groups.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group::GroupFactory;
///
/// let group = GroupFactory::new(&db)
///     .internal_name("Vip")
///     .display_name("§aVip")
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    internal_name: String,
    display_name: String,
    prefix: Option<String>,
    visualization: Option<String>,
    permissions: Option<String>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - internal_name: `"Group{id}"`
    /// - display_name: `"§7Group{id}"`
    /// - prefix: `Some("§7")`
    /// - visualization: `Some("Group{id}")`
    /// - permissions: `Some("rank.group{id}")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            internal_name: format!("Group{}", id),
            display_name: format!("§7Group{}", id),
            prefix: Some("§7".to_string()),
            visualization: Some(format!("Group{}", id)),
            permissions: Some(format!("rank.group{}", id)),
        }
    }

    /// Sets the unique internal name.
    pub fn internal_name(mut self, internal_name: impl Into<String>) -> Self {
        self.internal_name = internal_name.into();
        self
    }

    /// Sets the formatted display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the chat prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the visualization label.
    pub fn visualization(mut self, visualization: impl Into<String>) -> Self {
        self.visualization = Some(visualization.into());
        self
    }

    /// Sets the permissions string. A `tag.` prefix marks the group as a cosmetic tag.
    pub fn permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = Some(permissions.into());
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let now = Utc::now();
        entity::group::ActiveModel {
            id: ActiveValue::NotSet,
            internal_name: ActiveValue::Set(self.internal_name),
            display_name: ActiveValue::Set(self.display_name),
            prefix: ActiveValue::Set(self.prefix),
            visualization: ActiveValue::Set(self.visualization),
            permissions: ActiveValue::Set(self.permissions),
            created_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(Some(now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// Shorthand for `GroupFactory::new(db).build().await`.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_group_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Group).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let group = GroupFactory::new(db)
            .internal_name("Youtuber")
            .prefix("§c[YT] ")
            .permissions("tag.youtuber")
            .build()
            .await?;

        assert_eq!(group.internal_name, "Youtuber");
        assert_eq!(group.prefix.as_deref(), Some("§c[YT] "));
        assert_eq!(group.permissions.as_deref(), Some("tag.youtuber"));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_internal_name() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Group).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        GroupFactory::new(db).internal_name("Vip").build().await?;
        let result = GroupFactory::new(db).internal_name("Vip").build().await;

        assert!(result.is_err());

        Ok(())
    }
}
