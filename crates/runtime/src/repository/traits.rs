//! Repository contract for the persisted best scores.

use super::error::Result;

/// Key-value store holding one best score per game mode.
///
/// Keys are the stable strings from [`game_core::GameMode::high_score_key`].
pub trait HighScoreRepository: Send + Sync {
    /// Stored value for `key`, or `0` when nothing was saved yet.
    fn load(&self, key: &str) -> Result<u64>;

    /// Overwrite the stored value for `key`.
    fn save(&self, key: &str, value: u64) -> Result<()>;
}
