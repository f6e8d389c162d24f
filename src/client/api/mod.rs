#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod group;

#[cfg(feature = "web")]
pub mod health;

#[cfg(feature = "web")]
pub mod message;

#[cfg(feature = "web")]
pub mod player;
