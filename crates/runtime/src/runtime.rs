//! High-level runtime orchestrator.
//!
//! The runtime owns the tick worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive runs.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::{GameConfig, GameMode, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::repository::{HighScoreRepository, InMemoryHighScoreRepo};
use crate::workers::{Command, TickWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Mode used by [`RuntimeHandle::restart`] before any explicit start.
    pub mode: GameMode,
    /// Drawing-area width in the same units as `game_config.tile_size`.
    pub viewport_width: u32,
    /// Fixed seed for every run; `None` draws a fresh one per run.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_VIEWPORT_WIDTH: u32 = 400;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            mode: GameMode::default(),
            viewport_width: Self::DEFAULT_VIEWPORT_WIDTH,
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the tick scheduler
///
/// Design: Runtime owns the worker task.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    config: RuntimeConfig,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Start a run in the configured mode and wait until the worker stops.
    ///
    /// The worker stops once every [`RuntimeHandle`] clone has been dropped.
    pub async fn run(self) -> Result<()> {
        self.handle.start(self.config.mode).await?;
        self.shutdown().await
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    high_scores: Option<Arc<dyn HighScoreRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            high_scores: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a fixed seed for every run
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the high-score store. Defaults to an in-memory repository.
    pub fn high_scores(mut self, repository: impl HighScoreRepository + 'static) -> Self {
        self.high_scores = Some(Arc::new(repository));
        self
    }

    /// Share an existing high-score store.
    pub fn shared_high_scores(mut self, repository: Arc<dyn HighScoreRepository>) -> Self {
        self.high_scores = Some(repository);
        self
    }

    /// Build the runtime
    ///
    /// Spawns the tick worker with an idle state in the configured mode. The
    /// scheduler stays stopped until the first [`RuntimeHandle::start`].
    pub async fn build(self) -> Result<Runtime> {
        let high_scores = self
            .high_scores
            .unwrap_or_else(|| Arc::new(InMemoryHighScoreRepo::new()) as Arc<dyn HighScoreRepository>);

        let mode = self.config.mode;
        let high_score = high_scores.load(mode.high_score_key())?;
        let initial_state = GameState::from_viewport(
            mode,
            self.config.viewport_width,
            &self.config.game_config,
            self.config.seed.unwrap_or_default(),
        )
        .with_high_score(high_score);

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = TickWorker::new(
            initial_state,
            self.config.game_config.clone(),
            self.config.viewport_width,
            self.config.seed,
            high_scores,
            command_rx,
            event_bus,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            config: self.config,
            worker_handle,
        })
    }
}
