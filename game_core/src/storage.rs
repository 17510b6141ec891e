//! High score persistence
//!
//! The score is stored as a decimal string under [`Params::HIGH_SCORE_KEY`].
//! Storage problems never stop the game: a missing or unreadable value loads
//! as zero and a failed write is logged and dropped.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store could not be reached at all
    Unavailable(String),
    /// The store refused the write (quota, private mode, ...)
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
            StorageError::WriteFailed(msg) => write!(f, "storage write failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Durable key-value storage for the high score
pub trait HighScoreStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read the stored high score, treating anything unusable as zero
pub fn load_high_score<S: HighScoreStore>(store: &S) -> u32 {
    match store.read(Params::HIGH_SCORE_KEY) {
        Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring unparseable high score {raw:?}");
            0
        }),
        Ok(None) => 0,
        Err(err) => {
            warn!("{err}; starting from a zero high score");
            0
        }
    }
}

/// Persist a new high score. Returns whether the write stuck.
pub fn save_high_score<S: HighScoreStore>(store: &mut S, score: u32) -> bool {
    match store.write(Params::HIGH_SCORE_KEY, &score.to_string()) {
        Ok(()) => {
            debug!("saved high score {score}");
            true
        }
        Err(err) => {
            warn!("{err}; high score {score} not persisted");
            false
        }
    }
}

/// In-memory store, used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw high score value
    pub fn with_high_score(raw: &str) -> Self {
        let mut store = Self::new();
        store
            .values
            .insert(Params::HIGH_SCORE_KEY.to_string(), raw.to_string());
        store
    }

    pub fn high_score_raw(&self) -> Option<&str> {
        self.values.get(Params::HIGH_SCORE_KEY).map(String::as_str)
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".into()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed("writes disabled".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_is_zero() {
        assert_eq!(load_high_score(&MemoryStore::new()), 0);
    }

    #[test]
    fn test_load_stored_value() {
        assert_eq!(load_high_score(&MemoryStore::with_high_score("42")), 42);
        assert_eq!(load_high_score(&MemoryStore::with_high_score(" 7\n")), 7);
    }

    #[test]
    fn test_load_garbage_is_zero() {
        for raw in ["", "abc", "-3", "1.5"] {
            assert_eq!(load_high_score(&MemoryStore::with_high_score(raw)), 0, "{raw:?}");
        }
    }

    #[test]
    fn test_load_unavailable_is_zero() {
        let mut store = MemoryStore::with_high_score("10");
        store.fail_reads = true;
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn test_save_writes_decimal() {
        let mut store = MemoryStore::new();
        assert!(save_high_score(&mut store, 12));
        assert_eq!(store.high_score_raw(), Some("12"));
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut store = MemoryStore::with_high_score("3");
        store.fail_writes = true;
        assert!(!save_high_score(&mut store, 9));
        assert_eq!(store.high_score_raw(), Some("3"));
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::WriteFailed("quota".into());
        assert_eq!(err.to_string(), "storage write failed: quota");
    }
}
