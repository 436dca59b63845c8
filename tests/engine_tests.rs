//! Full-round engine scenarios.
//!
//! These tests drive complete rounds through the public API the way an
//! input adapter would: one cell index per event, rendering decisions
//! driven entirely by the returned outcomes.

use ttt_engine::{
    Cell, GameEngine, MemoryStore, MoveOutcome, Phase, Player, ScoreRecord,
};

fn engine() -> GameEngine<MemoryStore> {
    GameEngine::new(MemoryStore::new())
}

/// Play a scripted round, asserting every move is accepted.
fn play(engine: &mut GameEngine<MemoryStore>, moves: &[usize]) -> MoveOutcome {
    let mut last = None;
    for &index in moves {
        last = engine.apply_move(index);
        assert!(last.is_some(), "scripted move at {index} was rejected");
    }
    last.expect("empty move script")
}

// =============================================================================
// Win Scenarios
// =============================================================================

/// X completes the top row; scores and streaks update, record is saved.
#[test]
fn test_x_wins_top_row() {
    let mut engine = engine();

    let outcome = play(&mut engine, &[0, 4, 1, 3, 2]);

    assert_eq!(outcome, MoveOutcome::Win(Player::X));
    assert_eq!(engine.phase(), Phase::Won(Player::X));
    assert_eq!(engine.scores().wins(Player::X), 1);
    assert_eq!(engine.scores().streak(Player::X), 1);
    assert_eq!(engine.scores().wins(Player::O), 0);
    assert_eq!(engine.scores().streak(Player::O), 0);
    assert_eq!(engine.store().saved(), Some(engine.scores()));
}

/// O wins; the score update goes to the player who just moved.
#[test]
fn test_o_wins_top_row() {
    let mut engine = engine();

    let outcome = play(&mut engine, &[4, 0, 8, 1, 5, 2]);

    assert_eq!(outcome, MoveOutcome::Win(Player::O));
    assert_eq!(engine.scores().wins(Player::O), 1);
    assert_eq!(engine.scores().streak(Player::O), 1);
    assert_eq!(engine.scores().wins(Player::X), 0);
}

/// The last cell placed completes both a full board and a winning line;
/// this must be a win, never a draw.
#[test]
fn test_win_takes_precedence_over_draw() {
    let mut engine = engine();

    // Ninth move: X fills the board and completes column [2, 5, 8].
    let outcome = play(&mut engine, &[2, 0, 3, 1, 5, 4, 7, 6, 8]);

    assert!(engine.board().is_full());
    assert_eq!(outcome, MoveOutcome::Win(Player::X));
    assert_eq!(engine.phase(), Phase::Won(Player::X));
    assert_eq!(engine.scores().wins(Player::X), 1);
}

// =============================================================================
// Draw Scenarios
// =============================================================================

/// Full board, no line completed: draw, and no score change.
#[test]
fn test_draw_leaves_scores_untouched() {
    let mut engine = engine();

    // X: 0, 1, 5, 6, 8. O: 2, 3, 4, 7.
    let outcome = play(&mut engine, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(engine.phase(), Phase::Drawn);
    assert_eq!(engine.scores(), &ScoreRecord::new());
    // Nothing was ever saved: saves only happen on wins.
    assert_eq!(engine.store().saved(), None);
}

/// Draws do not reset streaks.
#[test]
fn test_draw_preserves_streaks() {
    let mut engine = engine();

    play(&mut engine, &[0, 4, 1, 3, 2]);
    engine.reset();
    play(&mut engine, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(engine.scores().streak(Player::X), 1);
}

// =============================================================================
// Streaks Across Rounds
// =============================================================================

/// Two consecutive X wins build a streak of 2.
#[test]
fn test_consecutive_wins_build_streak() {
    let mut engine = engine();

    play(&mut engine, &[0, 4, 1, 3, 2]);
    engine.reset();
    play(&mut engine, &[6, 4, 7, 3, 8]);

    assert_eq!(engine.scores().wins(Player::X), 2);
    assert_eq!(engine.scores().streak(Player::X), 2);
    assert_eq!(engine.scores().streak(Player::O), 0);
}

/// An O win zeroes X's streak without touching X's win total.
#[test]
fn test_opposing_win_resets_streak() {
    let mut engine = engine();

    play(&mut engine, &[0, 4, 1, 3, 2]);
    engine.reset();
    play(&mut engine, &[4, 0, 8, 1, 5, 2]);

    assert_eq!(engine.scores().wins(Player::X), 1);
    assert_eq!(engine.scores().streak(Player::X), 0);
    assert_eq!(engine.scores().wins(Player::O), 1);
    assert_eq!(engine.scores().streak(Player::O), 1);
}

// =============================================================================
// Terminal-State and Reset Behavior
// =============================================================================

/// After a win, every further move is ignored until reset.
#[test]
fn test_terminal_round_ignores_all_moves() {
    let mut engine = engine();
    play(&mut engine, &[0, 4, 1, 3, 2]);

    let board_before = *engine.board();
    for index in 0..9 {
        assert_eq!(engine.apply_move(index), None);
    }
    assert_eq!(engine.board(), &board_before);
}

/// Reset starts a fresh round with X to move; the next round plays out
/// independently of the previous board.
#[test]
fn test_reset_starts_fresh_round() {
    let mut engine = engine();
    play(&mut engine, &[0, 4, 1, 3, 2]);

    engine.reset();

    assert_eq!(engine.phase(), Phase::AwaitingMove(Player::X));
    // Cell 0 was X's in the last round; it is playable again.
    assert_eq!(engine.apply_move(0), Some(MoveOutcome::Continue(Player::O)));
    assert_eq!(engine.board().get(0), Some(Cell::Marked(Player::X)));
    assert_eq!(engine.board().mark_count(), 1);
}
