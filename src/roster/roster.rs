use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use crate::core::participant::normalize;

/// An ordered list of participant names, in stalking order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub names: Vec<String>,
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Roster {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            source: None,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.names.is_empty() {
            errors.push("Roster has no names".to_string());
        }

        let mut seen = HashSet::new();
        for (index, name) in self.names.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(format!("Blank name at position {}", index + 1));
                continue;
            }
            if !seen.insert(normalize(name)) {
                errors.push(format!("Duplicate name: '{}'", name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roster() {
        let roster = Roster::from_names(["Ann", "Bo", "Cid"]);
        assert!(roster.validate().is_ok());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::default();
        let errors = roster.validate().unwrap_err();
        assert_eq!(errors, vec!["Roster has no names"]);
    }

    #[test]
    fn test_final_sigma_duplicates_detected() {
        let roster = Roster::from_names(["ΟΔΟΣ", "οδοσ"]);
        let errors = roster.validate().unwrap_err();
        assert_eq!(errors, vec!["Duplicate name: 'οδοσ'"]);
    }

    #[test]
    fn test_duplicates_ignore_case() {
        let roster = Roster::from_names(["Ann", "Bo", "ANN", " "]);
        let errors = roster.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"Duplicate name: 'ANN'".to_string()));
        assert!(errors.contains(&"Blank name at position 4".to_string()));
    }
}
