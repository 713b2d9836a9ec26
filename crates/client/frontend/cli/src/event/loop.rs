//! Event loop orchestrating runtime events, user input, and rendering.

use std::collections::HashMap;

use anyhow::{Context, Result};
use game_core::GameMode;
use runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use strum::IntoEnumIterator;
use tokio::{
    sync::broadcast,
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{EventConsumer, view_model::ViewModel};

/// Event loop owning the presentation state.
///
/// - Rebuilds the ViewModel from every snapshot the tick worker publishes
/// - Feeds runtime events to the consumer (message log)
/// - Forwards directions, pause and start requests through the handle
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) handle: RuntimeHandle,
    game_rx: broadcast::Receiver<RuntimeEvent>,
    lifecycle_rx: broadcast::Receiver<RuntimeEvent>,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    /// `None` until the first run starts.
    pub(crate) view_model: Option<ViewModel>,
    pub(crate) cli_config: CliConfig,
    frame_interval: Duration,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        mut subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        consumer: C,
        selected: GameMode,
        cli_config: CliConfig,
        frame_interval: Duration,
    ) -> Result<Self> {
        let game_rx = subscriptions
            .remove(&Topic::GameState)
            .context("missing GameState subscription")?;
        let lifecycle_rx = subscriptions
            .remove(&Topic::Lifecycle)
            .context("missing Lifecycle subscription")?;

        Ok(Self {
            handle,
            game_rx,
            lifecycle_rx,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(selected),
            view_model: None,
            cli_config,
            frame_interval,
        })
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        for mode in GameMode::iter() {
            let best = self.handle.high_score(mode).await?;
            self.app_state.record_high_score(mode, best);
        }
        self.push_viewport(terminal).await?;
        self.render(terminal)?;

        let mut input_ticker = input_interval(self.frame_interval);

        loop {
            tokio::select! {
                result = self.game_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                result = self.lifecycle_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                _ = input_ticker.tick() => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }
}

/// Fixed-rate input poll timer. Created once per loop so that runtime events
/// arriving faster than the frame interval cannot postpone input polling.
fn input_interval(frame_interval: Duration) -> time::Interval {
    let mut interval = time::interval(frame_interval);
    interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
    interval
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn input_polling_survives_a_busy_event_stream() {
        let (tx, mut rx) = broadcast::channel::<u64>(64);
        let producer = tokio::spawn(async move {
            for n in 0.. {
                if tx.send(n).is_err() {
                    break;
                }
                time::sleep(Duration::from_millis(10)).await;
            }
        });

        // Events arrive every 10 ms, five times faster than input is polled.
        let mut interval = input_interval(Duration::from_millis(50));
        let deadline = time::sleep(Duration::from_millis(600));
        tokio::pin!(deadline);

        let mut polls = 0;
        let mut events = 0;
        loop {
            tokio::select! {
                Ok(_) = rx.recv() => events += 1,
                _ = interval.tick() => polls += 1,
                _ = &mut deadline => break,
            }
        }
        producer.abort();

        assert!(events > polls);
        assert!(polls >= 6, "input polled only {polls} times");
    }
}
