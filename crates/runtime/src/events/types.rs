//! Event types for different topics.

use game_core::{GameMode, GameOverReason, GameState, TickEvent};
use serde::{Deserialize, Serialize};

/// Events related to game state changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// A tick ran. Carries the state after the tick and what happened during it.
    Advanced {
        snapshot: Box<GameState>,
        events: Vec<TickEvent>,
    },
}

/// Run lifecycle and persistence notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LifecycleEvent {
    RunStarted {
        mode: GameMode,
        tile_count: u32,
        high_score: u64,
        seed: u64,
    },
    Paused,
    Resumed,
    GameOver {
        mode: GameMode,
        reason: GameOverReason,
        final_score: u64,
        high_score: u64,
    },
    HighScoreSaved {
        mode: GameMode,
        value: u64,
    },
    /// Writing the high score failed; the in-memory value is still correct.
    HighScoreSaveFailed {
        mode: GameMode,
        error: String,
    },
}
