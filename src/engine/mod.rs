//! The turn/board state machine.
//!
//! One [`GameEngine`] instance holds a round in progress: the board, the
//! player to move, and the cumulative score record. Frontends feed it cell
//! indices and render whatever [`MoveOutcome`] comes back.

pub mod game;
pub mod outcome;

pub use game::GameEngine;
pub use outcome::{MoveOutcome, Phase};
