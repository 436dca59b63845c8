//! Score persistence stores.
//!
//! The engine saves the record after every win and loads it once at
//! startup. Loads that find nothing (or find garbage) report `None`; the
//! engine falls back to an all-zero record rather than surfacing an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::record::ScoreRecord;

/// Default file name for [`JsonFileStore`], the single fixed storage slot.
pub const SCORE_FILE_NAME: &str = "tictactoe_scores.json";

/// Errors that can occur while saving a score record.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write score record to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize score record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence seam for the score record.
///
/// One flat record, one fixed slot, overwritten wholesale. Implementations
/// must treat missing or unreadable state as `None` on load, never as an
/// error.
pub trait ScoreStore {
    /// Load the stored record, or `None` if nothing usable is stored.
    fn load(&mut self) -> Option<ScoreRecord>;

    /// Overwrite the stored record.
    fn save(&mut self, record: &ScoreRecord) -> Result<(), StoreError>;
}

/// In-memory store for tests and sessions without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Option<ScoreRecord>,
}

impl MemoryStore {
    /// Empty store: first load reports `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a record.
    #[must_use]
    pub fn with_record(record: ScoreRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    /// The last record saved, if any.
    #[must_use]
    pub fn saved(&self) -> Option<&ScoreRecord> {
        self.record.as_ref()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Option<ScoreRecord> {
        self.record
    }

    fn save(&mut self, record: &ScoreRecord) -> Result<(), StoreError> {
        self.record = Some(*record);
        Ok(())
    }
}

/// Stores the record as a single JSON file, overwritten on every save.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`SCORE_FILE_NAME`] inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SCORE_FILE_NAME))
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> Option<ScoreRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "score file unreadable");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "score file malformed");
                None
            }
        }
    }

    fn save(&mut self, record: &ScoreRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
