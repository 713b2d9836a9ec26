//! Runtime event handling.

use anyhow::Result;
use client_frontend_core::{EventConsumer, view_model::ViewModel};
use runtime::{Event as RuntimeEvent, GameStateEvent, LifecycleEvent};
use tokio::sync::broadcast::error::RecvError;

use super::super::EventLoop;
use crate::presentation::terminal::Tui;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Returns `true` when the loop should stop.
    pub(in crate::event) fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let event = match result {
            Ok(event) => event,
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                return Ok(true);
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                return Ok(false);
            }
        };

        let impact = self.consumer.on_event(&event);
        self.apply(&event);

        if impact.requires_redraw {
            self.render(terminal)?;
        }
        Ok(false)
    }

    fn apply(&mut self, event: &RuntimeEvent) {
        match event {
            RuntimeEvent::GameState(GameStateEvent::Advanced { snapshot, .. }) => {
                if !self.app_state.is_start_screen() {
                    self.view_model = Some(ViewModel::from_state(snapshot));
                }
            }
            RuntimeEvent::Lifecycle(LifecycleEvent::RunStarted {
                mode, high_score, ..
            }) => {
                self.app_state.record_high_score(*mode, *high_score);
                self.app_state.enter_playing(*mode);
            }
            RuntimeEvent::Lifecycle(LifecycleEvent::GameOver {
                mode,
                reason,
                final_score,
                high_score,
            }) => {
                self.app_state
                    .finish(*mode, *reason, *final_score, *high_score);
            }
            RuntimeEvent::Lifecycle(LifecycleEvent::Paused) => self.set_paused(true),
            RuntimeEvent::Lifecycle(LifecycleEvent::Resumed) => self.set_paused(false),
            RuntimeEvent::Lifecycle(LifecycleEvent::HighScoreSaved { .. })
            | RuntimeEvent::Lifecycle(LifecycleEvent::HighScoreSaveFailed { .. }) => {}
        }
    }

    pub(in crate::event) fn set_paused(&mut self, paused: bool) {
        if let Some(view_model) = self.view_model.as_mut() {
            view_model.hud.paused = paused;
        }
    }
}
