//! Tick worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), advances
//! the run via [`game_core::GameEngine`] on a fixed-period interval, persists
//! new high scores and publishes events to the [`EventBus`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use game_core::{
    CardinalDirection, GameConfig, GameEngine, GameMode, GameState, TickInput, TickOutcome,
    TickReport,
};

use crate::api::Result;
use crate::events::{Event, EventBus, GameStateEvent, LifecycleEvent};
use crate::repository::HighScoreRepository;

/// Commands that can be sent to the tick worker
pub enum Command {
    /// Begin a fresh run. `None` keeps the current mode.
    Start {
        mode: Option<GameMode>,
        reply: oneshot::Sender<Result<GameState>>,
    },
    SetDirection {
        direction: CardinalDirection,
        reply: oneshot::Sender<bool>,
    },
    TogglePause {
        reply: oneshot::Sender<bool>,
    },
    Resize {
        viewport_width: u32,
        reply: oneshot::Sender<()>,
    },
    /// Advance one tick outside the scheduler.
    Step {
        reply: oneshot::Sender<TickReport>,
    },
    /// Query the current game state (read-only).
    QueryState {
        reply: oneshot::Sender<GameState>,
    },
    HighScore {
        mode: GameMode,
        reply: oneshot::Sender<Result<u64>>,
    },
}

/// Background task that processes commands and scheduled ticks.
///
/// At most one interval exists at a time: starting a run drops the previous
/// one before creating its own, game over drops it, and a changed tick
/// period replaces it.
pub struct TickWorker {
    state: GameState,
    config: GameConfig,
    viewport_width: u32,
    seed: Option<u64>,
    high_scores: Arc<dyn HighScoreRepository>,
    /// Best value reached per mode in this process, saved or not.
    best: HashMap<GameMode, u64>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    ticker: Option<Interval>,
}

impl TickWorker {
    pub fn new(
        state: GameState,
        config: GameConfig,
        viewport_width: u32,
        seed: Option<u64>,
        high_scores: Arc<dyn HighScoreRepository>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            "TickWorker initialized: mode={}, grid={}x{}",
            state.mode,
            state.grid.tile_count(),
            state.grid.tile_count()
        );

        Self {
            state,
            config,
            viewport_width,
            seed,
            high_scores,
            best: HashMap::new(),
            command_rx,
            event_bus,
            ticker: None,
        }
    }

    /// Main worker loop. Exits once every handle has been dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = next_tick(&mut self.ticker) => {
                    self.advance();
                }
            }
        }
        debug!("TickWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start { mode, reply } => {
                let mode = mode.unwrap_or(self.state.mode);
                let result = self.start_run(mode);
                if reply.send(result).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::SetDirection { direction, reply } => {
                let accepted = self.state.queue_direction(direction);
                if reply.send(accepted).is_err() {
                    debug!("SetDirection reply channel closed (caller dropped)");
                }
            }
            Command::TogglePause { reply } => {
                self.toggle_pause();
                if reply.send(self.state.paused).is_err() {
                    debug!("TogglePause reply channel closed (caller dropped)");
                }
            }
            Command::Resize {
                viewport_width,
                reply,
            } => {
                debug!("Viewport width {} recorded for next run", viewport_width);
                self.viewport_width = viewport_width;
                if reply.send(()).is_err() {
                    debug!("Resize reply channel closed (caller dropped)");
                }
            }
            Command::Step { reply } => {
                let report = self.advance();
                if reply.send(report).is_err() {
                    debug!("Step reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::HighScore { mode, reply } => {
                let best = self.best.get(&mode).copied().unwrap_or_default();
                let result = self
                    .high_scores
                    .load(mode.high_score_key())
                    .map(|loaded| loaded.max(best))
                    .map_err(Into::into);
                if reply.send(result).is_err() {
                    debug!("HighScore reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Replaces the state with a fresh run and restarts the scheduler.
    ///
    /// On error the current run and its interval are left untouched.
    fn start_run(&mut self, mode: GameMode) -> Result<GameState> {
        let loaded = self.high_scores.load(mode.high_score_key())?;
        let high_score = loaded.max(self.best.get(&mode).copied().unwrap_or_default());
        let seed = self.seed.unwrap_or_else(rand::random);
        let state = GameState::from_viewport(mode, self.viewport_width, &self.config, seed)
            .with_high_score(high_score);

        self.state = state;
        self.ticker = Some(new_interval(self.state.tick_period_ms));

        info!(
            "Run started: mode={}, grid={}, seed={}, high_score={}",
            mode,
            self.state.grid.tile_count(),
            seed,
            high_score
        );
        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::RunStarted {
                mode,
                tile_count: self.state.grid.tile_count(),
                high_score,
                seed,
            }));

        Ok(self.state.clone())
    }

    fn toggle_pause(&mut self) {
        if !self.state.toggle_pause() {
            return;
        }
        let event = if self.state.paused {
            LifecycleEvent::Paused
        } else {
            LifecycleEvent::Resumed
        };
        debug!("Pause gate: {:?}", event);
        self.event_bus.publish(Event::Lifecycle(event));
    }

    /// Runs one engine tick and everything that reacts to it.
    fn advance(&mut self) -> TickReport {
        let report = GameEngine::new(&mut self.state).step(TickInput::none());
        if !report.advanced {
            return report;
        }

        if let Some(value) = report.new_high_score() {
            self.persist_high_score(value);
        }

        self.event_bus
            .publish(Event::GameState(GameStateEvent::Advanced {
                snapshot: Box::new(self.state.clone()),
                events: report.events.clone(),
            }));

        match report.outcome {
            TickOutcome::GameOver(reason) => {
                self.ticker = None;
                info!(
                    "Game over: mode={}, reason={}, score={}",
                    self.state.mode,
                    reason.as_str(),
                    self.state.score_value()
                );
                self.event_bus
                    .publish(Event::Lifecycle(LifecycleEvent::GameOver {
                        mode: self.state.mode,
                        reason,
                        final_score: self.state.score_value(),
                        high_score: self.state.high_score,
                    }));
            }
            TickOutcome::Continue => self.reschedule_if_needed(),
        }

        report
    }

    fn persist_high_score(&mut self, value: u64) {
        let mode = self.state.mode;
        let best = self.best.entry(mode).or_default();
        *best = (*best).max(value);

        let event = match self.high_scores.save(mode.high_score_key(), value) {
            Ok(()) => LifecycleEvent::HighScoreSaved { mode, value },
            Err(e) => {
                warn!("Failed to persist high score {} for {}: {}", value, mode, e);
                LifecycleEvent::HighScoreSaveFailed {
                    mode,
                    error: e.to_string(),
                }
            }
        };
        self.event_bus.publish(Event::Lifecycle(event));
    }

    /// Recreates the interval when the engine changed the tick period.
    fn reschedule_if_needed(&mut self) {
        let Some(ticker) = self.ticker.as_ref() else {
            return;
        };
        let period = Duration::from_millis(self.state.tick_period_ms);
        if ticker.period() != period {
            debug!("Tick period now {} ms", self.state.tick_period_ms);
            self.ticker = Some(new_interval(self.state.tick_period_ms));
        }
    }
}

fn new_interval(period_ms: u64) -> Interval {
    let period = Duration::from_millis(period_ms.max(1));
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Resolves on the next scheduled tick; pends forever while no run is active.
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
