//! Integration tests for the session state machine: setup, elimination, finishing.

use beauty_contest_web::{
    advance_round, resolve_round, GameError, GameSession, GameSettings, GameStatus,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn session(player_count: usize, elimination_threshold: i32) -> GameSession {
    GameSession::new(GameSettings {
        player_count,
        elimination_threshold,
        ..GameSettings::default()
    })
}

#[test]
fn new_session_roster_and_initial_state() {
    let s = session(5, -10);

    assert_eq!(s.round, 1);
    assert_eq!(s.status, GameStatus::Submitting);
    assert!(s.round_result.is_none());
    assert_eq!(s.players.len(), 5);

    // The human first, then the AI opponents, everyone at 0.
    assert!(!s.players[0].is_ai);
    assert_eq!(s.players[0].name, "You");
    assert!(s.players[1..].iter().all(|p| p.is_ai));
    assert!(s.players.iter().all(|p| p.points == 0));

    // Ids are unique for the session's lifetime.
    for (i, a) in s.players.iter().enumerate() {
        for b in &s.players[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn advance_requires_results_status() {
    let mut s = session(3, -10);
    assert_eq!(advance_round(&mut s), Err(GameError::InvalidState));
}

#[test]
fn advance_eliminates_at_or_below_threshold() {
    // threshold -2: a player at -3 is removed, a player at -2 is removed,
    // a player at -1 stays.
    let mut s = session(4, -2);
    s.players[0].points = 0;
    s.players[1].points = -1;
    s.players[2].points = -2;
    s.players[3].points = -3;
    s.status = GameStatus::Results;

    advance_round(&mut s).unwrap();

    assert_eq!(s.players.len(), 2);
    assert!(s.players.iter().all(|p| p.points > -2));
    assert_eq!(s.status, GameStatus::Submitting);
    assert_eq!(s.round, 2);
    assert!(s.round_result.is_none());
}

#[test]
fn refiltering_a_filtered_roster_changes_nothing() {
    let mut s = session(5, -2);
    for (i, p) in s.players.iter_mut().enumerate() {
        p.points = -(i as i32); // 0, -1, -2, -3, -4
    }
    s.status = GameStatus::Results;
    advance_round(&mut s).unwrap();
    let roster = s.players.clone();

    s.status = GameStatus::Results;
    advance_round(&mut s).unwrap();

    assert_eq!(s.players, roster);
}

#[test]
fn game_finishes_when_one_player_remains() {
    let mut s = session(3, -1);
    s.players[0].points = -1;
    s.players[1].points = -1;
    s.players[2].points = 0; // an AI survives
    s.status = GameStatus::Results;

    advance_round(&mut s).unwrap();

    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.players.len(), 1);
    let winner = s.winner().unwrap();
    assert!(winner.is_ai);
    assert!(s.round_result.is_none());
}

#[test]
fn game_finishes_with_no_survivor() {
    let mut s = session(3, 0);
    for p in &mut s.players {
        p.points = -1;
    }
    s.status = GameStatus::Results;

    advance_round(&mut s).unwrap();

    assert_eq!(s.status, GameStatus::Finished);
    assert!(s.players.is_empty());
    assert!(s.winner().is_none());
}

#[test]
fn winner_is_none_while_game_is_running() {
    let s = session(3, -10);
    assert!(s.winner().is_none());
}

#[test]
fn round_does_not_increment_on_finish() {
    let mut s = session(2, -1);
    s.players[1].points = -1;
    s.status = GameStatus::Results;

    advance_round(&mut s).unwrap();

    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.round, 1);
}

#[test]
fn zero_threshold_ends_the_game_after_one_round() {
    // Known degenerate configuration: with threshold 0 even the round winners
    // (still at 0 points) sit at the threshold, so the first advance removes
    // everyone and the game is over.
    let mut s = session(4, 0);
    let mut rng = StdRng::seed_from_u64(3);
    resolve_round(&mut s, 50, &mut rng).unwrap();

    advance_round(&mut s).unwrap();

    assert!(s.players.is_empty());
    assert_eq!(s.status, GameStatus::Finished);
}

#[test]
fn single_player_game_is_a_trivial_win() {
    // Known degenerate configuration: player_count 1 means the human always
    // wins the round and the first advance ends the game.
    let mut s = session(1, -10);
    let mut rng = StdRng::seed_from_u64(0);

    resolve_round(&mut s, 77, &mut rng).unwrap();
    let result = s.round_result.as_ref().unwrap();
    assert_eq!(result.winners, vec![s.players[0].id]);
    assert_eq!(s.players[0].points, 0);

    advance_round(&mut s).unwrap();
    assert_eq!(s.status, GameStatus::Finished);
    assert!(!s.winner().unwrap().is_ai);
}

#[test]
fn restart_resets_the_game_but_keeps_the_id() {
    let mut s = session(4, -1);
    let id = s.id;
    let settings = s.settings;
    let mut rng = StdRng::seed_from_u64(11);
    resolve_round(&mut s, 20, &mut rng).unwrap();
    advance_round(&mut s).unwrap();

    s.restart();

    assert_eq!(s.id, id);
    assert_eq!(s.settings, settings);
    assert_eq!(s.round, 1);
    assert_eq!(s.status, GameStatus::Submitting);
    assert_eq!(s.players.len(), 4);
    assert!(s.players.iter().all(|p| p.points == 0 && p.number.is_none()));
}

#[test]
fn full_game_runs_to_completion() {
    let mut s = session(4, -3);
    let mut rng = StdRng::seed_from_u64(1234);

    let mut rounds = 0;
    while s.status != GameStatus::Finished {
        rounds += 1;
        assert!(rounds < 10_000, "game did not terminate");
        resolve_round(&mut s, 40, &mut rng).unwrap();
        advance_round(&mut s).unwrap();
    }

    assert!(s.players.len() <= 1);
    assert!(s.players.iter().all(|p| p.points > -3));
}
