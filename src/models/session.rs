//! GameSession: the per-session aggregate and its status machine.

use crate::models::player::Player;
use crate::models::round::RoundResult;
use crate::models::settings::GameSettings;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during game operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Human submission outside 0-100.
    NumberOutOfRange(i64),
    /// Session is not in a status that allows this action.
    InvalidState,
    /// Multiplayer mode requested; only single player is implemented.
    UnsupportedMode,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NumberOutOfRange(n) => {
                write!(f, "Please enter a valid number between 0 and 100 (got {})", n)
            }
            GameError::InvalidState => write!(f, "Invalid state for this action"),
            GameError::UnsupportedMode => write!(f, "Multiplayer mode is not implemented"),
        }
    }
}

/// Unique identifier for a game session.
pub type GameId = Uuid;

/// Current status of the session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for the human's number.
    #[default]
    Submitting,
    /// Round resolved; showing the outcome until the player advances.
    Results,
    /// Terminal: at most one player left.
    Finished,
}

/// Full session state: roster, settings, round counter, and status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    pub id: GameId,
    /// Starts at 1; incremented each time a resolved round continues play.
    pub round: u32,
    /// Creation order; shrinks via elimination, never grows.
    pub players: Vec<Player>,
    pub settings: GameSettings,
    pub status: GameStatus,
    /// Present only while `status == Results`.
    pub round_result: Option<RoundResult>,
}

impl GameSession {
    /// Create a new session in Submitting state: the human first, then
    /// `player_count - 1` AI opponents, everyone at 0 points.
    pub fn new(settings: GameSettings) -> Self {
        let mut players = Vec::with_capacity(settings.player_count);
        players.push(Player::new_human("You"));
        for i in 1..settings.player_count {
            players.push(Player::new_ai(i));
        }
        Self {
            id: Uuid::new_v4(),
            round: 1,
            players,
            settings,
            status: GameStatus::Submitting,
            round_result: None,
        }
    }

    /// The sole survivor once the game is finished. None while the game is
    /// still running, and None when every player was eliminated at once.
    pub fn winner(&self) -> Option<&Player> {
        if self.status != GameStatus::Finished {
            return None;
        }
        self.players.first()
    }

    /// Start over with the same settings ("Play Again"): fresh roster at
    /// round 1, keeping the session id.
    pub fn restart(&mut self) {
        let id = self.id;
        *self = Self::new(self.settings);
        self.id = id;
    }
}
