//! Game logic: round resolution and round advancement.

mod advance;
mod round;

pub use advance::advance_round;
pub use round::{resolve_round, score_submissions, MAX_NUMBER};
