//! File-based HighScoreRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};

use crate::repository::{HighScoreRepository, RepositoryError, Result};

const FILE_NAME: &str = "high_scores.json";

/// File-based implementation of HighScoreRepository.
///
/// # File Format
///
/// All modes share one JSON object keyed by the mode's high-score key:
///
/// ```json
/// { "escapeHighScore": 42, "snakeHighScore": 130 }
/// ```
///
/// Writes go to a temp file first and are moved into place with an atomic
/// rename. A value that is not a non-negative integer (or a string holding
/// one) reads as absent; an unreadable file reads as empty.
pub struct FileHighScoreRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileHighScoreRepository {
    /// Create a repository storing its file under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(FILE_NAME),
            write_lock: Mutex::new(()),
        })
    }

    /// Create a repository in the platform data directory.
    pub fn in_default_location() -> Result<Self> {
        Self::new(crate::dirs::data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        match serde_json::from_slice::<Map<String, Value>>(&bytes) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable high score file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            }
        }
    }
}

fn parse_score(key: &str, value: &Value) -> Option<u64> {
    let parsed = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    if parsed.is_none() {
        tracing::warn!("Ignoring unparsable high score for {}: {}", key, value);
    }
    parsed
}

impl HighScoreRepository for FileHighScoreRepository {
    fn load(&self, key: &str) -> Result<u64> {
        let scores = self.read_all()?;
        Ok(scores
            .get(key)
            .and_then(|value| parse_score(key, value))
            .unwrap_or(0))
    }

    fn save(&self, key: &str, value: u64) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut scores = self.read_all()?;
        scores.insert(key.to_owned(), Value::from(value));

        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&scores)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {}={} to {}", key, value, self.path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_values_are_accepted() {
        assert_eq!(parse_score("k", &Value::from("17")), Some(17));
        assert_eq!(parse_score("k", &Value::from(17u64)), Some(17));
        assert_eq!(parse_score("k", &Value::from(-3)), None);
        assert_eq!(parse_score("k", &Value::from("fast")), None);
        assert_eq!(parse_score("k", &Value::Null), None);
    }
}
