//! Game settings: the immutable per-session configuration.

use serde::{Deserialize, Serialize};

/// Game mode selected at setup. Only single player is implemented; requesting
/// multiplayer is rejected when the game is created.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Single,
    Multiplayer,
}

/// Configuration for one game session, fixed at creation.
///
/// Defaults match the setup form: 5 players, base factor 0.8, elimination
/// at -10 points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub mode: GameMode,
    /// Total players including the human. A count of 1 is accepted and simply
    /// produces a trivial game (the lone player always wins the round).
    #[serde(default = "default_player_count")]
    pub player_count: usize,
    /// Multiplier applied to the round average to get the target. Intended
    /// range 0.1-1.0 but used as given.
    #[serde(default = "default_base_factor")]
    pub base_factor: f64,
    /// A player is eliminated once their points fall to or below this.
    /// Intended to be <= 0; a threshold of 0 eliminates every round loser
    /// after the first round.
    #[serde(default = "default_elimination_threshold")]
    pub elimination_threshold: i32,
}

fn default_player_count() -> usize {
    5
}

fn default_base_factor() -> f64 {
    0.8
}

fn default_elimination_threshold() -> i32 {
    -10
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            player_count: default_player_count(),
            base_factor: default_base_factor(),
            elimination_threshold: default_elimination_threshold(),
        }
    }
}
