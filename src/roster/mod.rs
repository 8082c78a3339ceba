pub mod roster;
pub mod loader;

pub use roster::Roster;
pub use loader::RosterLoader;
