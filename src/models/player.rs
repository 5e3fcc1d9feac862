//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in round results and lookups).
pub type PlayerId = Uuid;

/// A player in the game: the human or one of the AI opponents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name ("You" for the human, "AI 1", "AI 2", ... for opponents).
    pub name: String,
    /// Immutable for the player's lifetime; AI players draw their numbers at random.
    pub is_ai: bool,
    /// Starts at 0 and only ever goes down (non-winners lose 1 per round).
    pub points: i32,
    /// Last submitted number (0-100); None before the first round.
    pub number: Option<u8>,
    /// Reserved for multiplayer; never read in single-player games.
    pub connected: bool,
}

impl Player {
    /// Create the human player.
    pub fn new_human(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            is_ai: false,
            points: 0,
            number: None,
            connected: true,
        }
    }

    /// Create an AI opponent, numbered from 1 ("AI 1", "AI 2", ...).
    pub fn new_ai(index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: format!("AI {index}"),
            is_ai: true,
            points: 0,
            number: None,
            connected: true,
        }
    }

    /// Penalize this player for not winning the round.
    pub fn lose_point(&mut self) {
        self.points -= 1;
    }
}
