use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid input: a kill ring needs at least one name")]
    InvalidInput,

    #[error("Not in the kill ring: {name}")]
    NotInRing { name: String },

    #[error("Game is already over, {winner} has won")]
    GameAlreadyOver { winner: String },

    #[error("No active game")]
    NoActiveGame,

    #[error("Roster error: {message}")]
    Roster { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Input error: {message}")]
    Input { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl GameError {
    pub fn not_in_ring<S: Into<String>>(name: S) -> Self {
        Self::NotInRing { name: name.into() }
    }

    pub fn game_already_over<S: Into<String>>(winner: S) -> Self {
        Self::GameAlreadyOver {
            winner: winner.into(),
        }
    }

    pub fn roster<S: Into<String>>(message: S) -> Self {
        Self::Roster {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_in_ring_error() {
        let error = GameError::not_in_ring("Zed");
        assert!(matches!(error, GameError::NotInRing { .. }));
        assert_eq!(error.to_string(), "Not in the kill ring: Zed");
    }

    #[test]
    fn test_game_already_over_error() {
        let error = GameError::game_already_over("Ann");
        assert!(matches!(error, GameError::GameAlreadyOver { .. }));
        assert_eq!(error.to_string(), "Game is already over, Ann has won");
    }

    #[test]
    fn test_roster_error() {
        let error = GameError::roster("Duplicate name: 'bo'");
        assert_eq!(error.to_string(), "Roster error: Duplicate name: 'bo'");
    }
}
