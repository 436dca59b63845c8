//! The game engine proper.

use tracing::{debug, warn};

use crate::core::{Board, Player};
use crate::rules::{has_won, is_full};
use crate::score::{ScoreRecord, ScoreStore};

use super::outcome::{MoveOutcome, Phase};

/// Two-player tic-tac-toe engine with persistent score tracking.
///
/// ## Lifecycle
///
/// Construction loads the score record from the injected store (all zeros
/// if nothing usable is stored) and starts a round at
/// [`Phase::AwaitingMove`]`(X)`. Each [`apply_move`](Self::apply_move)
/// call is one input event, handled synchronously and atomically. After a
/// terminal outcome the caller presents the result and, once the user
/// acknowledges it, calls [`reset`](Self::reset) to start the next round.
///
/// ## Ordering
///
/// Win detection runs before draw detection, and the score update uses the
/// player who just moved, before any turn flip. A move that completes a
/// line while filling the last cell is a win, never a draw.
pub struct GameEngine<S: ScoreStore> {
    board: Board,
    phase: Phase,
    scores: ScoreRecord,
    store: S,
}

impl<S: ScoreStore> GameEngine<S> {
    /// Create an engine backed by `store`, loading any persisted scores.
    pub fn new(mut store: S) -> Self {
        let scores = store.load().unwrap_or_default();
        Self {
            board: Board::new(),
            phase: Phase::AwaitingMove(Player::X),
            scores,
            store,
        }
    }

    /// Apply a move at `index` for the player to move.
    ///
    /// Returns `None` without changing any state when the move is invalid:
    /// the round is over, the index is out of range, or the cell is
    /// already marked. The input adapter is expected to pre-filter these,
    /// but the engine re-checks rather than trusting it.
    ///
    /// On a win the score record is updated and saved through the store;
    /// a failed save is logged and otherwise ignored.
    pub fn apply_move(&mut self, index: usize) -> Option<MoveOutcome> {
        let mover = match self.phase {
            Phase::AwaitingMove(player) => player,
            _ => return None,
        };

        if !self.board.mark(index, mover) {
            return None;
        }
        debug!(%mover, index, "mark placed");

        // Win before draw: a board-filling winning move is a win.
        let outcome = if has_won(&self.board, mover) {
            self.phase = Phase::Won(mover);
            self.scores.record_win(mover);
            if let Err(e) = self.store.save(&self.scores) {
                warn!(error = %e, "score save failed");
            }
            MoveOutcome::Win(mover)
        } else if is_full(&self.board) {
            self.phase = Phase::Drawn;
            MoveOutcome::Draw
        } else {
            let next = mover.opponent();
            self.phase = Phase::AwaitingMove(next);
            MoveOutcome::Continue(next)
        };

        debug!(?outcome, "move applied");
        Some(outcome)
    }

    /// Start a new round: empty board, X to move. Scores are untouched.
    pub fn reset(&mut self) {
        self.board.clear();
        self.phase = Phase::AwaitingMove(Player::X);
        debug!("round reset");
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the round stands.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player to move, or `None` once the round is over.
    #[must_use]
    pub fn player_to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    /// Whether moves are currently accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Cumulative scores and streaks.
    #[must_use]
    pub fn scores(&self) -> &ScoreRecord {
        &self.scores
    }

    /// The injected score store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
