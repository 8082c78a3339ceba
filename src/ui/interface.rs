use dialoguer::{Confirm, Input};

use crate::config::Config;
use crate::core::{GameEngine, KillOutcome};
use crate::roster::Roster;
use crate::ui::{Display, ThemeManager};
use crate::utils::{GameError, GameResult};
use tracing::{error, info, warn};

pub struct GameInterface {
    engine: GameEngine,
    display: Display,
    config: Config,
}

impl GameInterface {
    pub fn new(config: Config) -> GameResult<Self> {
        info!("Initializing game interface");

        let theme_manager = ThemeManager::new();
        let mut display = Display::new(theme_manager, config.ui.text_width)
            .map_err(|e| GameError::configuration(format!("Failed to create display: {}", e)))?;

        if !display.set_theme(&config.ui.theme) {
            let available = display.available_themes().join(", ");
            warn!(
                "Unknown theme '{}', using default (available: {})",
                config.ui.theme,
                available
            );
        }

        Ok(Self {
            engine: GameEngine::new(),
            display,
            config,
        })
    }

    pub fn start(&mut self, roster: &Roster) -> GameResult<()> {
        if let Err(errors) = roster.validate() {
            return Err(GameError::roster(errors.join("; ")));
        }

        self.engine.start_game(roster.names.as_slice())
    }

    /// Prompts for victims until one assassin is left.
    pub fn run(&mut self) -> GameResult<()> {
        self.display.clear_screen().ok();
        self.display.show_title("Assassin")?;

        while !self.engine.is_game_over() {
            self.show_status()?;

            let name: String = Input::new()
                .with_prompt("next victim?")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| GameError::input(format!("Victim input error: {}", e)))?;

            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            if self.config.game.confirm_kills && !self.confirm_kill(name)? {
                continue;
            }

            // Fresh screen per turn; the outcome message stays above the next ring
            self.display.clear_screen().ok();

            if let Err(e) = self.handle_victim(name) {
                error!("Kill error: {}", e);
                self.display.show_error(&format!("Could not record that kill: {}", e))?;
            }
        }

        self.show_final_results()
    }

    /// Plays a fixed list of victims. Names left over once the game is won are ignored.
    pub fn run_scripted(&mut self, victims: &[String]) -> GameResult<()> {
        for (index, victim) in victims.iter().enumerate() {
            if self.engine.is_game_over() {
                warn!("Game already won, ignoring {} remaining victims", victims.len() - index);
                break;
            }

            self.show_status()?;
            self.display.show_message(&format!("next victim? {}", victim), "info")?;
            self.handle_victim(victim.trim())?;
        }

        if self.engine.is_game_over() {
            self.show_final_results()
        } else {
            self.show_status()
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn handle_victim(&mut self, name: &str) -> GameResult<()> {
        match self.engine.resolve_victim(name)? {
            KillOutcome::Killed(record) => {
                self.display.show_success(&format!("{} was killed by {}", record.victim, record.killer))?;
            }
            KillOutcome::AlreadyDead => {
                self.display.show_warning(&format!("{} is already dead.", name))?;
            }
            KillOutcome::Unknown => {
                self.display.show_warning("unknown person.")?;
            }
        }

        self.display.show_separator()?;
        Ok(())
    }

    fn confirm_kill(&self, name: &str) -> GameResult<bool> {
        Confirm::new()
            .with_prompt(format!("Really record a kill on {}?", name))
            .default(true)
            .interact()
            .map_err(|e| GameError::input(format!("Confirmation error: {}", e)))
    }

    fn show_status(&self) -> GameResult<()> {
        let game_state = self.engine.game_state().ok_or(GameError::NoActiveGame)?;

        self.display.show_kill_ring(game_state)?;
        if self.config.game.show_graveyard_each_turn {
            self.display.show_graveyard(game_state)?;
        }
        Ok(())
    }

    fn show_final_results(&self) -> GameResult<()> {
        let game_state = self.engine.game_state().ok_or(GameError::NoActiveGame)?;

        if let Some(winner) = game_state.winner() {
            self.display.show_winner(winner)?;
        }
        self.display.show_graveyard(game_state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_interface() -> GameInterface {
        let mut config = Config::default();
        config.ui.theme = "plain".to_string();
        GameInterface::new(config).unwrap()
    }

    fn victims(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut config = Config::default();
        config.ui.theme = "neon".to_string();

        assert!(GameInterface::new(config).is_ok());
    }

    #[test]
    fn test_start_rejects_duplicate_roster() {
        let mut interface = plain_interface();
        let roster = Roster::from_names(["Ann", "ann"]);

        assert!(matches!(interface.start(&roster), Err(GameError::Roster { .. })));
        assert!(!interface.engine().is_game_active());
    }

    #[test]
    fn test_scripted_game_to_the_end() {
        let mut interface = plain_interface();
        interface.start(&Roster::from_names(["Ann", "Bo", "Cid"])).unwrap();

        interface
            .run_scripted(&victims(&["bo", "bo", "Zed", "Cid", "Ann"]))
            .unwrap();

        let game_state = interface.engine().game_state().unwrap();
        assert_eq!(game_state.winner(), Some("Ann"));
        assert_eq!(
            game_state.graveyard_lines(),
            vec!["Cid was killed by Ann", "Bo was killed by Ann"]
        );
    }

    #[test]
    fn test_scripted_game_stops_midway() {
        let mut interface = plain_interface();
        interface.start(&Roster::from_names(["Ann", "Bo", "Cid", "Dee"])).unwrap();

        interface.run_scripted(&victims(&["Ann"])).unwrap();

        let game_state = interface.engine().game_state().unwrap();
        assert!(!game_state.is_game_over());
        assert_eq!(game_state.graveyard_lines(), vec!["Ann was killed by Dee"]);
    }

    #[test]
    fn test_scripted_without_game() {
        let mut interface = plain_interface();
        let result = interface.run_scripted(&victims(&["Ann"]));
        assert!(matches!(result, Err(GameError::NoActiveGame)));
    }
}
