//! Engine phases and per-move outcomes.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Where a round stands.
///
/// A round starts at `AwaitingMove(X)`. `Won` and `Drawn` are terminal:
/// the engine ignores moves until [`reset`](crate::GameEngine::reset)
/// returns it to `AwaitingMove(X)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to move.
    AwaitingMove(Player),
    /// This player completed a line.
    Won(Player),
    /// Board full, no line completed.
    Drawn,
}

impl Phase {
    /// Whether moves are currently accepted.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Phase::AwaitingMove(_))
    }
}

/// Result of a successfully applied move.
///
/// Ignored moves (occupied cell, finished game, bad index) produce no
/// outcome at all; see [`GameEngine::apply_move`](crate::GameEngine::apply_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Round continues; this player moves next.
    Continue(Player),
    /// The mover completed a line and wins the round.
    Win(Player),
    /// The mover filled the board without completing a line.
    Draw,
}

impl MoveOutcome {
    /// Whether the round ended with this move.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MoveOutcome::Continue(_))
    }
}
