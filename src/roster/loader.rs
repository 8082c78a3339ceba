use std::fs;
use std::path::Path;
use crate::roster::Roster;
use crate::utils::{GameError, GameResult};
use tracing::{debug, info};

/// Reads rosters from disk.
///
/// `.json` files hold an array of names. Anything else is read as plain text with
/// one name per line; blank lines and lines starting with `#` are skipped.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load<P: AsRef<Path>>(path: P) -> GameResult<Roster> {
        let path = path.as_ref();

        info!("Loading roster from: {:?}", path);

        if !path.exists() {
            return Err(GameError::roster(format!("Roster file not found: {:?}", path)));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| GameError::roster(format!("Failed to read roster file: {}", e)))?;

        let names = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str::<Vec<String>>(&content)
                .map_err(|e| GameError::roster(format!("Failed to parse roster JSON: {}", e)))?
                .into_iter()
                .map(|name| name.trim().to_string())
                .collect()
        } else {
            Self::parse_lines(&content)
        };

        let roster = Roster {
            names,
            source: Some(path.to_path_buf()),
        };

        if let Err(errors) = roster.validate() {
            return Err(GameError::roster(format!("Roster validation failed: {}", errors.join("; "))));
        }

        info!("Loaded {} names", roster.len());
        Ok(roster)
    }

    pub fn parse_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                debug!("Roster entry: {}", line);
                line.to_string()
            })
            .collect()
    }
}
