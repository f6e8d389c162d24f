mod group;
mod message;
mod player;
mod schema;
