use crate::server::{
    data::group::GroupRepository,
    model::group::{default_groups, CreateGroupParams, UpdateGroupParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod insert_missing;
mod internal_name_taken;
mod update;

fn params(internal_name: &str) -> CreateGroupParams {
    CreateGroupParams {
        internal_name: internal_name.to_string(),
        display_name: format!("§6{}", internal_name),
        prefix: "§6".to_string(),
        visualization: internal_name.to_string(),
        permissions: format!("rank.{}", internal_name.to_lowercase()),
    }
}
