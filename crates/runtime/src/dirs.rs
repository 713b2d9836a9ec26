//! Platform-specific directory utilities.
//!
//! Follows platform conventions for cache and data directories:
//! - Linux: `~/.local/share/gridchase`, `~/.cache/gridchase`
//! - macOS: `~/Library/Application Support/gridchase`, `~/Library/Caches/gridchase`
//! - Windows: `%APPDATA%\gridchase`, `%LOCALAPPDATA%\gridchase`
use std::path::PathBuf;

const APPLICATION: &str = "gridchase";

/// Directory holding persisted high scores. Falls back to `./save_data`.
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Directory for log files. Falls back to `/tmp/gridchase/logs`.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APPLICATION))
        .join("logs")
}
