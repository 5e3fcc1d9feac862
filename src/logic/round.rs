//! Round resolution: AI draws, average/target, winners, point penalties.

use crate::models::{GameError, GameSession, GameStatus, PlayerId, RoundResult};
use rand::Rng;

/// Largest number a player may submit (submissions are 0..=MAX_NUMBER).
pub const MAX_NUMBER: u8 = 100;

/// Resolve the current round with the human's submission.
///
/// 1. Every AI player draws a uniform random integer in 0-100 from `rng`.
/// 2. Average and target (`average * base_factor`) are computed over all
///    submissions.
/// 3. Winners (everyone at the minimum |number - target|) keep their points;
///    everyone else loses 1.
///
/// The session must be in Submitting status and `human_number` must be within
/// 0-100; on rejection the session is left untouched. Passing a seeded rng
/// makes the AI draws reproducible.
pub fn resolve_round(
    session: &mut GameSession,
    human_number: u8,
    rng: &mut impl Rng,
) -> Result<(), GameError> {
    if session.status != GameStatus::Submitting {
        return Err(GameError::InvalidState);
    }
    if human_number > MAX_NUMBER {
        return Err(GameError::NumberOutOfRange(i64::from(human_number)));
    }

    // One submission per player, in roster order.
    let submissions: Vec<(PlayerId, u8)> = session
        .players
        .iter()
        .map(|p| {
            let n = if p.is_ai {
                rng.gen_range(0..=MAX_NUMBER)
            } else {
                human_number
            };
            (p.id, n)
        })
        .collect();

    let result = score_submissions(&submissions, session.settings.base_factor);

    for (player, &(_, number)) in session.players.iter_mut().zip(&submissions) {
        player.number = Some(number);
        if !result.is_winner(player.id) {
            player.lose_point();
        }
    }

    session.round_result = Some(result);
    session.status = GameStatus::Results;
    Ok(())
}

/// Score one complete set of submissions (one entry per player, non-empty).
///
/// Winner selection compares distances with exact f64 equality; ties are
/// inclusive, so several players can win the round at once.
pub fn score_submissions(submissions: &[(PlayerId, u8)], base_factor: f64) -> RoundResult {
    let total: u32 = submissions.iter().map(|&(_, n)| u32::from(n)).sum();
    let average = f64::from(total) / submissions.len() as f64;
    let target = average * base_factor;

    let mut min_difference = f64::INFINITY;
    let mut winners: Vec<PlayerId> = Vec::new();
    for &(id, number) in submissions {
        let difference = (f64::from(number) - target).abs();
        if difference < min_difference {
            min_difference = difference;
            winners.clear();
            winners.push(id);
        } else if difference == min_difference {
            winners.push(id);
        }
    }

    RoundResult {
        average,
        target,
        winners,
    }
}
