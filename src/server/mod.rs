//! Server-side API backend and business logic.
//!
//! This module contains the REST backend of the dashboard: the endpoints used by the
//! admin UI and by game-server plugins, the rules behind them, and the database access
//! over the game server's `account` table and the dashboard's own `groups` and
//! `messages` tables. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as rank resolution and reference checks
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, `account` schema check, migrations and seeding
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Extractors** (`extract`) - Body, path and query extractors rejecting with `AppError`
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates the payload, converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO and wraps it in an `ApiResponse`
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
