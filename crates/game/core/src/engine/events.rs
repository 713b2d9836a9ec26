//! Observable facts produced by a single tick.

use crate::state::{EffectKind, Item, Position};

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOverReason {
    /// A pursuer reached the player's tile.
    Captured,
    /// The snake head left the grid.
    HitWall,
    /// The snake head ran into its own body.
    HitSelf,
}

impl GameOverReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Captured => "captured",
            GameOverReason::HitWall => "hit the wall",
            GameOverReason::HitSelf => "bit itself",
        }
    }
}

/// Something the rendering or persistence collaborators may want to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickEvent {
    FoodEaten { position: Position, score: u64 },
    /// The snake speed ramp shortened the scheduler period.
    SpeedIncreased { tick_period_ms: u64 },
    PursuerSpawned { position: Position, move_frequency: u32 },
    ItemSpawned { item: Item },
    ItemCollected { item: Item },
    EffectExpired { kind: EffectKind },
    /// The run beat the stored best; must be persisted right away.
    NewHighScore { value: u64 },
    GameOver { reason: GameOverReason, final_score: u64 },
}
