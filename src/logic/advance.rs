//! Advancing from results to the next round (or the end of the game).

use crate::models::{GameError, GameSession, GameStatus};

/// Advance past the current round's results: drop every player at or below
/// the elimination threshold, then either start the next round or finish the
/// game when at most one player remains.
///
/// The filtering is idempotent: every survivor already satisfies
/// `points > elimination_threshold`, so re-filtering changes nothing.
pub fn advance_round(session: &mut GameSession) -> Result<(), GameError> {
    if session.status != GameStatus::Results {
        return Err(GameError::InvalidState);
    }

    let threshold = session.settings.elimination_threshold;
    session.players.retain(|p| p.points > threshold);
    session.round_result = None;

    if session.players.len() <= 1 {
        session.status = GameStatus::Finished;
    } else {
        session.round += 1;
        session.status = GameStatus::Submitting;
    }
    Ok(())
}
