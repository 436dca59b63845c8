//! Core domain types: players, cells, and the 3x3 board.
//!
//! These types are pure data with no game-flow logic. Turn order and
//! terminal-state handling live in the `engine` and `rules` modules.

pub mod board;
pub mod player;

pub use board::{Board, Cell, CELL_COUNT};
pub use player::Player;
