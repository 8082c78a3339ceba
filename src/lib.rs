pub mod core;
pub mod roster;
pub mod ui;
pub mod config;
pub mod utils;

pub use crate::core::{GameEngine, GameState, KillOutcome, KillRecord, Participant};
pub use roster::{Roster, RosterLoader};
pub use ui::GameInterface;
pub use crate::config::Config;
pub use utils::{GameError, GameResult};

// Re-export commonly used types
pub type Result<T> = anyhow::Result<T>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
