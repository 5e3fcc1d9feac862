//! RoundResult: the per-round outcome summary.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Outcome of one resolved round. Only exists while the session is showing
/// results; cleared when the next round starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Arithmetic mean of all submitted numbers.
    pub average: f64,
    /// `average * base_factor`; the value players were scored against.
    pub target: f64,
    /// Everyone tied for the minimum |number - target|. Never empty.
    pub winners: Vec<PlayerId>,
}

impl RoundResult {
    pub fn is_winner(&self, id: PlayerId) -> bool {
        self.winners.contains(&id)
    }
}
