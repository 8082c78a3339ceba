use crate::core::{EventLogger, GameEvent, GameEventHandler, GameState, KillRecord};
use crate::utils::{GameError, GameResult};
use tracing::{debug, info};

/// Result of naming a victim from the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillOutcome {
    Killed(KillRecord),
    AlreadyDead,
    Unknown,
}

pub struct GameEngine {
    game_state: Option<GameState>,
    event_handler: EventLogger,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            game_state: None,
            event_handler: EventLogger::default(),
        }
    }

    pub fn start_game<S: AsRef<str>>(&mut self, names: &[S]) -> GameResult<()> {
        let game_state = GameState::new(names.iter().map(|name| name.as_ref().to_string()))?;

        info!("Starting new game with {} participants", game_state.ring_len());

        self.game_state = Some(game_state);
        self.emit_event(GameEvent::game_started(names));

        Ok(())
    }

    pub fn record_kill(&mut self, name: &str) -> GameResult<KillRecord> {
        let game_state = self.game_state.as_mut().ok_or(GameError::NoActiveGame)?;

        let record = game_state.bury(name)?;
        // Snapshot before emitting, emit_event needs &mut self
        let survivors = game_state.ring_len();
        let kills_recorded = game_state.graveyard_len();
        let winner = game_state.winner().map(str::to_string);

        info!("{} was killed by {}", record.victim, record.killer);
        self.emit_event(GameEvent::kill_recorded(&record.victim, &record.killer, survivors));

        // The kill that leaves one assassin standing also ends the game
        if let Some(winner) = winner {
            info!("Game won by {}", winner);
            self.emit_event(GameEvent::game_won(&winner, kills_recorded));
        }

        Ok(record)
    }

    /// Classifies a victim name the way the interactive driver reports it.
    pub fn resolve_victim(&mut self, name: &str) -> GameResult<KillOutcome> {
        let game_state = self.game_state.as_ref().ok_or(GameError::NoActiveGame)?;

        if game_state.graveyard_contains(name) {
            debug!("'{}' is already in the graveyard", name);
            return Ok(KillOutcome::AlreadyDead);
        }

        // Unknown names are an expected answer at the prompt, not a failure
        match self.record_kill(name) {
            Ok(record) => Ok(KillOutcome::Killed(record)),
            Err(GameError::NotInRing { .. }) => {
                debug!("'{}' is not a known participant", name);
                Ok(KillOutcome::Unknown)
            }
            Err(e) => Err(e),
        }
    }

    pub fn game_state(&self) -> Option<&GameState> {
        self.game_state.as_ref()
    }

    pub fn is_game_active(&self) -> bool {
        self.game_state.is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state
            .as_ref()
            .map(GameState::is_game_over)
            .unwrap_or(false)
    }

    pub fn winner(&self) -> Option<&str> {
        self.game_state.as_ref().and_then(GameState::winner)
    }

    fn emit_event(&mut self, event: GameEvent) {
        self.event_handler.handle_event(&event);
    }

    pub fn event_history(&self) -> &[GameEvent] {
        self.event_handler.events()
    }

    pub fn recent_events(&self, count: usize) -> Vec<GameEvent> {
        self.event_handler
            .recent_events(count)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEventType;

    fn started(names: &[&str]) -> GameEngine {
        let mut engine = GameEngine::new();
        engine.start_game(names).unwrap();
        engine
    }

    #[test]
    fn test_game_engine_creation() {
        let engine = GameEngine::new();
        assert!(!engine.is_game_active());
        assert!(!engine.is_game_over());
        assert!(engine.winner().is_none());
    }

    #[test]
    fn test_start_game() {
        let mut engine = GameEngine::new();

        assert!(matches!(engine.start_game::<&str>(&[]), Err(GameError::InvalidInput)));
        assert!(!engine.is_game_active());

        engine.start_game(&["Ann", "Bo", "Cid"]).unwrap();
        assert!(engine.is_game_active());
        assert_eq!(engine.game_state().unwrap().ring_len(), 3);
        assert_eq!(engine.event_history()[0].event_type, GameEventType::GameStarted);
    }

    #[test]
    fn test_record_kill_without_game() {
        let mut engine = GameEngine::new();
        assert!(matches!(engine.record_kill("Ann"), Err(GameError::NoActiveGame)));
    }

    #[test]
    fn test_failed_kill_reports_game_error_and_emits_nothing() {
        let mut engine = started(&["Ann", "Bo"]);

        assert!(matches!(engine.record_kill("Zed"), Err(GameError::NotInRing { .. })));

        engine.record_kill("Ann").unwrap();
        assert!(matches!(engine.record_kill("Bo"), Err(GameError::GameAlreadyOver { .. })));

        // started, killed, won
        assert_eq!(engine.event_history().len(), 3);
    }

    #[test]
    fn test_record_kill_uses_canonical_names() {
        let mut engine = started(&["Ann", "Bo", "Cid"]);

        let record = engine.record_kill("BO").unwrap();
        assert_eq!(
            record,
            KillRecord {
                victim: "Bo".to_string(),
                killer: "Ann".to_string(),
            }
        );
        assert!(!engine.is_game_over());

        let event = &engine.recent_events(1)[0];
        assert_eq!(event.event_type, GameEventType::KillRecorded);
        assert_eq!(event.data["survivors"], 2);
    }

    #[test]
    fn test_final_kill_emits_game_won() {
        let mut engine = started(&["Ann", "Bo"]);

        engine.record_kill("Ann").unwrap();

        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), Some("Bo"));
        let event = &engine.recent_events(1)[0];
        assert_eq!(event.event_type, GameEventType::GameWon);
        assert_eq!(event.data["winner"], "Bo");
        assert_eq!(engine.event_history().len(), 3);
    }

    #[test]
    fn test_resolve_victim_outcomes() {
        let mut engine = started(&["Ann", "Bo", "Cid"]);

        let outcome = engine.resolve_victim("cid").unwrap();
        assert!(matches!(outcome, KillOutcome::Killed(ref record) if record.killer == "Bo"));

        assert_eq!(engine.resolve_victim("Cid").unwrap(), KillOutcome::AlreadyDead);
        assert_eq!(engine.resolve_victim("Zed").unwrap(), KillOutcome::Unknown);
        assert_eq!(engine.game_state().unwrap().ring_len(), 2);
    }

    #[test]
    fn test_resolve_victim_after_game_over() {
        let mut engine = started(&["Ann", "Bo"]);
        engine.record_kill("Bo").unwrap();

        assert!(matches!(
            engine.resolve_victim("Ann"),
            Err(GameError::GameAlreadyOver { .. })
        ));
        assert_eq!(engine.resolve_victim("Zed").unwrap(), KillOutcome::Unknown);
    }
}
