use std::collections::VecDeque;
use std::io::{self, Write};
use crate::core::participant::{normalize, Participant};
use crate::utils::{GameError, GameResult};

const INDENT: &str = "    ";

/// Who died and who did it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillRecord {
    pub victim: String,
    pub killer: String,
}

/// The kill ring and the graveyard.
///
/// The ring is stored in stalking order: every participant stalks the next one and
/// the last participant stalks the first. The graveyard is kept most-recent-first.
/// A participant lives in exactly one of the two at any time.
#[derive(Debug, Clone)]
pub struct GameState {
    kill_ring: Vec<Participant>,
    graveyard: VecDeque<Participant>,
}

impl GameState {
    /// Builds the kill ring from `names`, keeping their order.
    ///
    /// Names are assumed to be unique ignoring case. Fails with
    /// [`GameError::InvalidInput`] when `names` is empty.
    pub fn new<I, S>(names: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kill_ring: Vec<Participant> = names.into_iter().map(Participant::new).collect();

        if kill_ring.is_empty() {
            return Err(GameError::InvalidInput);
        }

        Ok(Self {
            kill_ring,
            graveyard: VecDeque::new(),
        })
    }

    /// One `"<name> is stalking <target>"` line per living participant, in ring order.
    pub fn kill_ring_lines(&self) -> Vec<String> {
        let len = self.kill_ring.len();
        self.kill_ring
            .iter()
            .enumerate()
            .map(|(index, assassin)| {
                // The last assassin wraps around to the head
                let target = &self.kill_ring[(index + 1) % len];
                format!("{} is stalking {}", assassin.name(), target.name())
            })
            .collect()
    }

    /// One `"<name> was killed by <killer>"` line per dead participant, most recent first.
    pub fn graveyard_lines(&self) -> Vec<String> {
        self.graveyard
            .iter()
            .map(|victim| {
                format!(
                    "{} was killed by {}",
                    victim.name(),
                    victim.killer().unwrap_or_default()
                )
            })
            .collect()
    }

    pub fn write_kill_ring<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_indented(out, &self.kill_ring_lines())
    }

    pub fn write_graveyard<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_indented(out, &self.graveyard_lines())
    }

    pub fn print_kill_ring(&self) -> io::Result<()> {
        self.write_kill_ring(&mut io::stdout().lock())
    }

    pub fn print_graveyard(&self) -> io::Result<()> {
        self.write_graveyard(&mut io::stdout().lock())
    }

    pub fn kill_ring_contains(&self, name: &str) -> bool {
        self.ring_position(name).is_some()
    }

    pub fn graveyard_contains(&self, name: &str) -> bool {
        let key = normalize(name);
        self.graveyard.iter().any(|victim| victim.key() == key)
    }

    pub fn is_game_over(&self) -> bool {
        self.kill_ring.len() == 1
    }

    pub fn winner(&self) -> Option<&str> {
        if self.is_game_over() {
            self.kill_ring.first().map(Participant::name)
        } else {
            None
        }
    }

    /// Moves `name` from the kill ring to the front of the graveyard.
    ///
    /// The victim's killer is whoever stalked them at that moment. Ring order of
    /// the survivors is unchanged. Membership is checked before game-over, so an
    /// unknown name on a finished game reports [`GameError::NotInRing`]. On error
    /// nothing is modified.
    pub fn kill(&mut self, name: &str) -> GameResult<()> {
        self.bury(name).map(|_| ())
    }

    /// Same as [`GameState::kill`], reporting the canonical victim and killer names.
    pub(crate) fn bury(&mut self, name: &str) -> GameResult<KillRecord> {
        let index = self
            .ring_position(name)
            .ok_or_else(|| GameError::not_in_ring(name))?;

        if let Some(winner) = self.winner() {
            return Err(GameError::game_already_over(winner));
        }

        // Predecessor with wraparound: the head is stalked by the tail
        let len = self.kill_ring.len();
        let killer = self.kill_ring[(index + len - 1) % len].name().to_string();

        // Survivors keep their relative order
        let mut victim = self.kill_ring.remove(index);
        let record = KillRecord {
            victim: victim.name().to_string(),
            killer: killer.clone(),
        };
        victim.mark_killed_by(killer);
        self.graveyard.push_front(victim);

        Ok(record)
    }

    /// The participant currently stalking `name`, if `name` is alive.
    pub fn stalker_of(&self, name: &str) -> Option<&str> {
        let len = self.kill_ring.len();
        self.ring_position(name)
            .map(|index| self.kill_ring[(index + len - 1) % len].name())
    }

    /// The participant `name` is currently stalking, if `name` is alive.
    pub fn target_of(&self, name: &str) -> Option<&str> {
        let len = self.kill_ring.len();
        self.ring_position(name)
            .map(|index| self.kill_ring[(index + 1) % len].name())
    }

    /// Most recently killed participant.
    pub fn last_kill(&self) -> Option<&Participant> {
        self.graveyard.front()
    }

    pub fn kill_ring(&self) -> impl Iterator<Item = &Participant> {
        self.kill_ring.iter()
    }

    pub fn graveyard(&self) -> impl Iterator<Item = &Participant> {
        self.graveyard.iter()
    }

    pub fn ring_len(&self) -> usize {
        self.kill_ring.len()
    }

    pub fn graveyard_len(&self) -> usize {
        self.graveyard.len()
    }

    // Compare against the stored keys so each participant's name is folded only once
    fn ring_position(&self, name: &str) -> Option<usize> {
        let key = normalize(name);
        self.kill_ring
            .iter()
            .position(|participant| participant.key() == key)
    }
}

fn write_indented<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}{}", INDENT, line)?;
    }
    Ok(())
}
