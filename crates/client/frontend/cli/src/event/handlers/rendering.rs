//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: self.view_model.as_ref(),
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            ui: &self.cli_config.ui,
        };

        ui::render(terminal, &ctx)
    }
}
