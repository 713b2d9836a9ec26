//! Keyboard handling and run control.

use anyhow::Result;
use client_frontend_core::{EventConsumer, view_model::ViewModel};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent};
use game_core::{CardinalDirection, GameMode};
use ratatui::layout::Rect;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{
    input::KeyAction,
    presentation::{terminal::Tui, ui},
    state::AppMode,
};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Drain every pending terminal event. Returns `true` when the user quits.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            let quit = match term_event::read()? {
                TermEvent::Key(key) => self.handle_key_press(key, terminal).await?,
                TermEvent::Resize(_, _) => {
                    self.push_viewport(terminal).await?;
                    self.render(terminal)?;
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        let action = self.input.handle_key(key);
        let mode = self.app_state.mode.clone();

        match (&mode, action) {
            (_, KeyAction::Quit) => {
                tracing::info!("Quit requested");
                return Ok(true);
            }
            (AppMode::StartScreen, KeyAction::Direction(CardinalDirection::Up)) => {
                self.app_state.select_prev();
            }
            (AppMode::StartScreen, KeyAction::Direction(CardinalDirection::Down)) => {
                self.app_state.select_next();
            }
            (AppMode::StartScreen, KeyAction::Confirm) => {
                let mode = self.app_state.selected;
                self.start_run(Some(mode), terminal).await?;
            }
            (AppMode::StartScreen, KeyAction::SelectMode(mode)) => {
                self.start_run(Some(mode), terminal).await?;
            }
            (AppMode::Playing, KeyAction::Direction(direction)) => {
                if !self.handle.set_direction(direction).await? {
                    tracing::debug!(?direction, "Direction refused");
                }
                return Ok(false);
            }
            (AppMode::Playing, KeyAction::TogglePause) => {
                let paused = self.handle.toggle_pause().await?;
                self.set_paused(paused);
            }
            (AppMode::GameOver(_), KeyAction::Confirm) => {
                self.start_run(None, terminal).await?;
            }
            (AppMode::GameOver(_), KeyAction::Menu) => {
                self.app_state.back_to_menu();
            }
            _ => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }

    /// Start a run in `mode`, or restart the current mode when `None`.
    async fn start_run(&mut self, mode: Option<GameMode>, terminal: &mut Tui) -> Result<()> {
        self.push_viewport(terminal).await?;

        let state = match mode {
            Some(mode) => self.handle.start(mode).await?,
            None => self.handle.restart().await?,
        };
        tracing::info!(
            mode = %state.mode,
            tiles = state.grid.tile_count(),
            "Run started"
        );

        self.app_state.record_high_score(state.mode, state.high_score);
        self.app_state.enter_playing(state.mode);
        self.view_model = Some(ViewModel::from_state(&state));
        Ok(())
    }

    /// Tell the runtime how wide the grid panel is. Applies at the next run start.
    pub(in crate::event) async fn push_viewport(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        let width = ui::grid_viewport_width(
            Rect::new(0, 0, size.width, size.height),
            &self.cli_config.ui,
        );
        if width == 0 {
            tracing::warn!(
                columns = size.width,
                rows = size.height,
                "Terminal too small for the grid panel"
            );
            return Ok(());
        }

        self.handle.resize(width).await?;
        Ok(())
    }
}
