//! Draw detection.

use crate::core::Board;

/// Whether every cell is marked.
///
/// A full board is only a draw if no player has won; callers must run win
/// detection first.
#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
