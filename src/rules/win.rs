//! Win detection.

use tracing::instrument;

use crate::core::{Board, Cell, Player};

/// The eight winning lines: three rows, three columns, two diagonals.
///
/// Order is fixed; [`winning_line`] reports the first match in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The first line fully marked by `player`, if any.
///
/// Returns the cell indices of the completed line so a presentation layer
/// can highlight it. One matching line is sufficient for a win; later
/// matches are not searched.
#[instrument(level = "trace", skip(board))]
#[must_use]
pub fn winning_line(board: &Board, player: Player) -> Option<[usize; 3]> {
    WINNING_LINES.into_iter().find(|line| {
        line.iter()
            .all(|&i| board.get(i) == Some(Cell::Marked(player)))
    })
}

/// Whether `player` has completed any line.
#[must_use]
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}
