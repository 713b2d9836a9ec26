//! In-memory HighScoreRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{HighScoreRepository, RepositoryError, Result};

/// In-memory implementation of HighScoreRepository.
///
/// Nothing survives the process; used when persistence is disabled.
#[derive(Debug, Default)]
pub struct InMemoryHighScoreRepo {
    scores: RwLock<HashMap<String, u64>>,
}

impl InMemoryHighScoreRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-seeded scores.
    pub fn with_scores<'a>(scores: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        let scores = scores
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect();
        Self {
            scores: RwLock::new(scores),
        }
    }
}

impl HighScoreRepository for InMemoryHighScoreRepo {
    fn load(&self, key: &str) -> Result<u64> {
        let scores = self
            .scores
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(scores.get(key).copied().unwrap_or(0))
    }

    fn save(&self, key: &str, value: u64) -> Result<()> {
        let mut scores = self
            .scores
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        scores.insert(key.to_owned(), value);
        Ok(())
    }
}
