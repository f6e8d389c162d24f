use crate::server::{
    data::player::PlayerRepository,
    model::player::{PlayerFilter, UpdatePlayerParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::account::AccountFactory};

mod count_by_rank;
mod delete;
mod get_paginated;
mod get_ranks;
mod update;
mod update_rank;
