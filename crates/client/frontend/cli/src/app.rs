//! CLI frontend implementation.
//!
//! This module provides the CLI frontend that implements the Frontend trait.
//! It receives a RuntimeHandle and runs the terminal UI.

use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Duration;

use client_frontend_core::{EventConsumer, Frontend, FrontendConfig, MessageFeed};
use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// CLI frontend that renders the game in a terminal.
///
/// This is a pure UI layer that:
/// - Receives RuntimeHandle for communication
/// - Does NOT own the Runtime
/// - Subscribes to the GameState and Lifecycle topics
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before anything can publish so no run event is missed
        let subscriptions = handle.subscribe_multiple(&[Topic::GameState, Topic::Lifecycle]);
        let initial_state = handle.query_state().await?;

        let consumer = MessageFeed::new(self.frontend_config.messages.clone());
        let event_loop = EventLoop::new(
            handle,
            subscriptions,
            consumer,
            initial_state.mode,
            self.cli_config.clone(),
            Duration::from_millis(self.frontend_config.frame_interval_ms.max(1)),
        )?;

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            messages = consumer.message_log().len(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}
