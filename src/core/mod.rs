pub mod engine;
pub mod game_state;
pub mod participant;
pub mod events;

pub use engine::{GameEngine, KillOutcome};
pub use game_state::{GameState, KillRecord};
pub use participant::Participant;
pub use events::{EventLogger, GameEvent, GameEventHandler, GameEventType};
