use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::utils::{GameError, GameResult};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub roster_file: Option<PathBuf>,
    pub show_graveyard_each_turn: bool,
    pub confirm_kills: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
    pub text_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                roster_file: None,
                show_graveyard_each_turn: true,
                confirm_kills: false,
            },
            ui: UiConfig {
                theme: "default".to_string(),
                text_width: 60,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config at {:?}, writing defaults", path);
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let config: Config = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GameError::configuration(format!("Failed to create config directory: {}", e)))?;
        }

        let toml_content = toml::to_string_pretty(self)?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        if self.ui.theme.trim().is_empty() {
            return Err(GameError::configuration("Theme name cannot be empty"));
        }
        if self.ui.text_width < 40 {
            return Err(GameError::configuration("Text width must be at least 40"));
        }
        if let Some(roster_file) = &self.game.roster_file {
            if roster_file.as_os_str().is_empty() {
                return Err(GameError::configuration("Roster file path cannot be empty"));
            }
        }

        Ok(())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(roster_file) = cli_config.roster_file {
            self.game.roster_file = Some(roster_file);
        }
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub roster_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub debug: bool,
    pub theme: Option<String>,
}
