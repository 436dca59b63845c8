//! # ttt-engine
//!
//! A tic-tac-toe game engine for two local players, designed to sit behind
//! any frontend (browser, terminal, GUI) that can translate clicks into
//! cell indices.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine holds board state, validates moves,
//!    switches turns, and detects terminal conditions. Rendering, sound,
//!    and dialogs belong to the caller.
//!
//! 2. **Explicit State**: All mutation goes through a [`GameEngine`]
//!    instance. No globals, no hidden shared state.
//!
//! 3. **Injected Persistence**: Scores and win streaks survive sessions
//!    through a [`ScoreStore`] the caller provides. The engine never
//!    touches storage APIs directly.
//!
//! ## Architecture
//!
//! - **Synchronous Event Loop**: Each [`GameEngine::apply_move`] call is
//!   one atomic input event. The engine never suspends or blocks; result
//!   acknowledgment (e.g. dismissing a dialog) is modeled as the caller
//!   invoking [`GameEngine::reset`] when ready.
//!
//! - **Total Operations**: Invalid moves (occupied cell, finished game,
//!   out-of-range index) are silently ignored, not signaled. The engine
//!   re-checks these itself rather than trusting the input adapter.
//!
//! ## Modules
//!
//! - `core`: Players, cells, the 3x3 board
//! - `rules`: Win and draw detection over a board
//! - `score`: Score record, streak bookkeeping, persistence stores
//! - `engine`: The turn/board state machine

pub mod core;
pub mod rules;
pub mod score;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Player, CELL_COUNT};

pub use crate::rules::{has_won, is_full, winning_line, WINNING_LINES};

pub use crate::score::{
    JsonFileStore, MemoryStore, ScoreRecord, ScoreStore, StoreError, SCORE_FILE_NAME,
};

pub use crate::engine::{GameEngine, MoveOutcome, Phase};
