use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEventType {
    GameStarted,
    KillRecorded,
    GameWon,
    Custom(String),
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    pub fn game_started<S: AsRef<str>>(names: &[S]) -> Self {
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        let data = serde_json::json!({
            "participants": names,
            "participant_count": names.len()
        });
        Self::new(GameEventType::GameStarted, data)
    }

    pub fn kill_recorded(victim: &str, killer: &str, survivors: usize) -> Self {
        let data = serde_json::json!({
            "victim": victim,
            "killer": killer,
            "survivors": survivors
        });
        Self::new(GameEventType::KillRecorded, data)
    }

    pub fn game_won(winner: &str, kills_recorded: usize) -> Self {
        let data = serde_json::json!({
            "winner": winner,
            "kills_recorded": kills_recorded
        });
        Self::new(GameEventType::GameWon, data)
    }

    pub fn custom<S: Into<String>>(event_name: S, data: serde_json::Value) -> Self {
        Self::new(GameEventType::Custom(event_name.into()), data)
    }
}

pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Bounded in-memory event history. The oldest events are dropped first.
#[derive(Debug)]
pub struct EventLogger {
    events: Vec<GameEvent>,
    max_events: usize,
}

impl EventLogger {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn events_by_type(&self, event_type: &GameEventType) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|event| std::mem::discriminant(&event.event_type) == std::mem::discriminant(event_type))
            .collect()
    }

    pub fn recent_events(&self, count: usize) -> Vec<&GameEvent> {
        self.events
            .iter()
            .rev()
            .take(count)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn export_events(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.events)
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());

        if self.events.len() > self.max_events {
            self.events.remove(0);
        }
    }
}
