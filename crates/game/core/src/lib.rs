//! Deterministic game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules of the three grid arcade modes
//! (chase, snake, swarm) and exposes pure APIs that the runtime drives on a
//! fixed tick. All state mutation flows through [`engine::GameEngine`] (or
//! the by-value [`engine::advance`]); supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod mode;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    GameEngine, GameOverReason, TickEvent, TickInput, TickOutcome, TickReport, advance,
};
pub use env::{PcgRng, RngOracle, SeedContext, compute_seed};
pub use mode::GameMode;
pub use state::{
    ActiveEffect, CardinalDirection, EffectKind, GameState, Grid, Item, ItemKind, PlayerState,
    Position, Pursuer, Snake,
};
