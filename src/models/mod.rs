//! Data structures for the beauty contest game: players, settings, session state.

mod player;
mod round;
mod session;
mod settings;

pub use player::{Player, PlayerId};
pub use round::RoundResult;
pub use session::{GameError, GameId, GameSession, GameStatus};
pub use settings::{GameMode, GameSettings};
