use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{CreateGroupParams, Group, UpdateGroupParams};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every group ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    pub async fn find_by_internal_name(&self, internal_name: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::InternalName.eq(internal_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Checks whether a group other than `exclude_id` already uses `internal_name`.
    ///
    /// # Arguments
    /// - `internal_name` - Name to look for
    /// - `exclude_id` - Group to ignore, used when renaming a group to its own name
    pub async fn internal_name_taken(
        &self,
        internal_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Group::find()
            .filter(entity::group::Column::InternalName.eq(internal_name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::group::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Inserts a group and returns the stored row.
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, DbErr> {
        let now = Utc::now();

        let entity = entity::group::ActiveModel {
            internal_name: ActiveValue::Set(params.internal_name),
            display_name: ActiveValue::Set(params.display_name),
            prefix: ActiveValue::Set(Some(params.prefix)),
            visualization: ActiveValue::Set(Some(params.visualization)),
            permissions: ActiveValue::Set(Some(params.permissions)),
            created_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Replaces the editable fields of a group and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The group after the update
    /// - `Ok(None)` - No group has this ID
    /// - `Err(DbErr)` - Database error, including unique violations on `internal_name`
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Option<Group>, DbErr> {
        if entity::prelude::Group::find_by_id(params.id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        entity::prelude::Group::update_many()
            .filter(entity::group::Column::Id.eq(params.id))
            .col_expr(
                entity::group::Column::InternalName,
                sea_orm::sea_query::Expr::value(params.internal_name),
            )
            .col_expr(
                entity::group::Column::DisplayName,
                sea_orm::sea_query::Expr::value(params.display_name),
            )
            .col_expr(
                entity::group::Column::Prefix,
                sea_orm::sea_query::Expr::value(params.prefix),
            )
            .col_expr(
                entity::group::Column::Visualization,
                sea_orm::sea_query::Expr::value(params.visualization),
            )
            .col_expr(
                entity::group::Column::Permissions,
                sea_orm::sea_query::Expr::value(params.permissions),
            )
            .col_expr(
                entity::group::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a group by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The group was deleted
    /// - `Ok(false)` - No group has this ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Inserts each group whose internal name is not present yet.
    ///
    /// Existing groups are left untouched, so edits made through the dashboard survive
    /// restarts.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of groups inserted
    pub async fn insert_missing(&self, groups: Vec<CreateGroupParams>) -> Result<usize, DbErr> {
        let mut inserted = 0;

        for group in groups {
            if self.internal_name_taken(&group.internal_name, None).await? {
                continue;
            }

            self.create(group).await?;
            inserted += 1;
        }

        Ok(inserted)
    }
}
