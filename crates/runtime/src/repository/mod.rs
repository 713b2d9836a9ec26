//! Repository layer for data that outlives a run.
//!
//! The only persisted value is a single best score per game mode. Everything
//! else is reset at the next run start.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileHighScoreRepository;
pub use memory::InMemoryHighScoreRepo;
pub use traits::HighScoreRepository;
