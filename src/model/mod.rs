//! Types and pure logic shared by the server and the browser client.
//!
//! DTOs here form the JSON contract of the REST API. `format` and the helpers in
//! `player` and `message` are dependency-free so both sides render identical previews.

pub mod api;
pub mod format;
pub mod group;
pub mod message;
pub mod player;
