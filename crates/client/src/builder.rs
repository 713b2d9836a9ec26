//! Assembles a [`Client`] from independently built layers.

use crate::{Client, Frontend};
use anyhow::{Context, Result};

/// Collects the runtime and the frontend. Both are required.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Usually built by `client_bootstrap::RuntimeBuilder`.
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("client needs a runtime; call .runtime() first")?;

        let frontend = self
            .frontend
            .context("client needs a frontend; call .frontend() first")?;

        Ok(Client { runtime, frontend })
    }
}
