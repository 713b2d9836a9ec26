//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! controlling runs or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{CardinalDirection, GameMode, GameState, TickReport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start a fresh run in `mode`, cancelling any run in progress.
    ///
    /// Returns the initial snapshot of the new run.
    pub async fn start(&self, mode: GameMode) -> Result<GameState> {
        self.request(|reply| Command::Start {
            mode: Some(mode),
            reply,
        })
        .await?
    }

    /// Start a fresh run in the current mode.
    pub async fn restart(&self) -> Result<GameState> {
        self.request(|reply| Command::Start { mode: None, reply })
            .await?
    }

    /// Buffer a direction for the next tick.
    ///
    /// Returns `false` when the direction was refused (snake reversal or a
    /// finished run).
    pub async fn set_direction(&self, direction: CardinalDirection) -> Result<bool> {
        self.request(|reply| Command::SetDirection { direction, reply })
            .await
    }

    /// Flip the pause gate. Returns the resulting `paused` flag.
    pub async fn toggle_pause(&self) -> Result<bool> {
        self.request(|reply| Command::TogglePause { reply }).await
    }

    /// Record a new drawing-area width. The grid is recomputed at the next
    /// run start; the current run keeps its grid.
    pub async fn resize(&self, viewport_width: u32) -> Result<()> {
        self.request(|reply| Command::Resize {
            viewport_width,
            reply,
        })
        .await
    }

    /// Advance exactly one tick, independent of the scheduler.
    pub async fn step(&self) -> Result<TickReport> {
        self.request(|reply| Command::Step { reply }).await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Best score recorded for `mode`.
    pub async fn high_score(&self, mode: GameMode) -> Result<u64> {
        self.request(|reply| Command::HighScore { mode, reply })
            .await?
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - One snapshot per advanced tick
    /// - `Topic::Lifecycle` - Run start, pause, game over, persistence
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut rx = handle.subscribe(Topic::Lifecycle);
    /// while let Ok(event) = rx.recv().await {
    ///     // Handle lifecycle events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
