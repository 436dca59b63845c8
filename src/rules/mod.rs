//! Terminal-state detection: win and draw predicates over a board.
//!
//! The engine checks for a win strictly before checking for a draw, so a
//! move that both completes a line and fills the board counts as a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_won, winning_line, WINNING_LINES};
