//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table the dashboard touches. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod group;
pub mod message;
pub mod player;
pub mod schema;

#[cfg(test)]
mod test;
