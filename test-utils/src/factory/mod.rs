//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::create_account(&db).await?;
//!     let group = factory::create_group(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let account = factory::account::AccountFactory::new(&db)
//!     .name("Notch")
//!     .rank("Gold")
//!     .build()
//!     .await?;
//!
//! let tag = factory::group::GroupFactory::new(&db)
//!     .internal_name("Youtuber")
//!     .prefix("§c[YT] ")
//!     .permissions("tag.youtuber")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create game account rows
//! - `group` - Create rank and tag groups
//! - `message` - Create message templates
//! - `helpers` - Unique id generation

pub mod account;
pub mod group;
pub mod helpers;
pub mod message;

pub use account::create_account;
pub use group::create_group;
pub use message::create_message;
