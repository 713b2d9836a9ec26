//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Tick scheduler, state ownership, high scores)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever sees a [`RuntimeHandle`]; the client keeps the
//! [`runtime::Runtime`] and shuts it down once the frontend returns.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::{Context, Result};
use runtime::RuntimeHandle;
use tokio::time::{Duration, timeout};

/// How long shutdown waits for the tick worker after the frontend exits.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives the runtime and frontend
/// 2. `Client::run()` transfers control to the frontend with a [`RuntimeHandle`]
/// 3. When the frontend returns, the runtime is shut down
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, or a shutdown failure when the frontend
    /// itself succeeded.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let handle: RuntimeHandle = runtime.handle();
        let frontend_result = frontend.run(handle).await;

        // The worker stops once the last handle is gone.
        let shutdown = match timeout(SHUTDOWN_TIMEOUT, runtime.shutdown()).await {
            Ok(result) => result.context("runtime shutdown failed"),
            Err(_) => {
                tracing::warn!("Runtime did not stop within {:?}", SHUTDOWN_TIMEOUT);
                Ok(())
            }
        };

        frontend_result?;
        shutdown
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use game_core::GameMode;
    use runtime::{Runtime, RuntimeConfig};

    use super::*;

    /// Plays a few ticks through the handle, then quits.
    struct ScriptedFrontend {
        steps: usize,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            handle.start(GameMode::Snake).await?;
            for _ in 0..self.steps {
                handle.step().await?;
            }
            let state = handle.query_state().await?;
            anyhow::ensure!(state.elapsed_ticks == self.steps as u64);
            Ok(())
        }
    }

    struct FailingFrontend;

    #[async_trait]
    impl Frontend for FailingFrontend {
        async fn run(&mut self, _handle: RuntimeHandle) -> Result<()> {
            anyhow::bail!("frontend crashed")
        }
    }

    async fn runtime() -> Runtime {
        let mut config = RuntimeConfig::default();
        // Keep the scheduler out of the way of manual steps.
        config.game_config = config.game_config.with_tick_period_ms(600_000);
        Runtime::builder()
            .config(config)
            .seed(1)
            .build()
            .await
            .expect("runtime")
    }

    #[tokio::test]
    async fn runs_frontend_and_shuts_down() {
        let client = Client::builder()
            .runtime(runtime().await)
            .frontend(ScriptedFrontend { steps: 3 })
            .build()
            .expect("client");

        client.run().await.expect("run");
    }

    #[tokio::test]
    async fn frontend_error_is_returned() {
        let client = Client::builder()
            .runtime(runtime().await)
            .frontend(FailingFrontend)
            .build()
            .expect("client");

        let error = client.run().await.expect_err("frontend failure");
        assert!(error.to_string().contains("frontend crashed"));
    }
}
