//! Beauty contest guessing game: library with models and game logic.

pub mod logic;
pub mod models;

pub use logic::{advance_round, resolve_round, score_submissions, MAX_NUMBER};
pub use models::{
    GameError, GameId, GameMode, GameSession, GameSettings, GameStatus, Player, PlayerId,
    RoundResult,
};
