//! Score tracking and persistence.
//!
//! ## ScoreRecord
//!
//! Cumulative wins and current win streaks for both players. Owned by the
//! engine, updated on every win, untouched by draws and resets.
//!
//! ## ScoreStore
//!
//! Injected persistence seam: one flat record under one fixed slot,
//! overwritten wholesale on every save. [`MemoryStore`] for tests and
//! ephemeral sessions, [`JsonFileStore`] for a single JSON file on disk.

pub mod record;
pub mod store;

pub use record::ScoreRecord;
pub use store::{JsonFileStore, MemoryStore, ScoreStore, StoreError, SCORE_FILE_NAME};
