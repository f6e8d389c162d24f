pub mod groups;
pub mod messages;
pub mod not_found;
pub mod players;

pub use groups::Groups;
pub use messages::Messages;
pub use not_found::NotFound;
pub use players::Players;
