use serde::Serialize;

/// A single player in the game, alive in the kill ring or resting in the graveyard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    name: String,
    #[serde(skip)]
    key: String,
    killer: Option<String>,
}

impl Participant {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        Self {
            key: normalize(&name),
            name,
            killer: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of whoever was stalking this participant when they died.
    pub fn killer(&self) -> Option<&str> {
        self.killer.as_deref()
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    // Only GameState::bury calls this, once, while moving the participant to the graveyard.
    pub(crate) fn mark_killed_by<S: Into<String>>(&mut self, killer: S) {
        debug_assert!(self.killer.is_none(), "killer is assigned exactly once");
        self.killer = Some(killer.into());
    }
}

/// Case-folded identity key for a name.
///
/// Folds one character at a time, so a word-final capital sigma keys the same as
/// any other sigma.
pub(crate) fn normalize(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}
