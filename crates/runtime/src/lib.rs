//! Runtime orchestration for the fixed-tick arcade engine.
//!
//! This crate wires the deterministic `game-core` engine to a tokio tick
//! scheduler, a topic event bus and high-score repositories. Consumers embed
//! [`Runtime`] and drive it through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`workers`] keeps the tick worker internal to the crate
//! - [`repository`] provides high-score persistence adapters
pub mod api;
pub mod dirs;
pub mod events;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, GameStateEvent, LifecycleEvent, Topic};
pub use repository::{
    FileHighScoreRepository, HighScoreRepository, InMemoryHighScoreRepo, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
