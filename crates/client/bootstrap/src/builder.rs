//! Builds the runtime and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{FileHighScoreRepository, HighScoreRepository, InMemoryHighScoreRepo, Runtime};

use crate::config::ClientConfig;

/// Builder that assembles the runtime and its high-score store for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
    high_scores: Option<Arc<dyn HighScoreRepository>>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            high_scores: None,
        }
    }

    /// Provide a custom high-score store, bypassing the persistence settings.
    pub fn high_scores(mut self, repository: impl HighScoreRepository + 'static) -> Self {
        self.high_scores = Some(Arc::new(repository));
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let high_scores = match self.high_scores {
            Some(repository) => repository,
            None => open_repository(&self.config)?,
        };

        let runtime = Runtime::builder()
            .config(self.config.runtime.clone())
            .shared_high_scores(high_scores)
            .build()
            .await
            .context("failed to build runtime")?;

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

fn open_repository(config: &ClientConfig) -> Result<Arc<dyn HighScoreRepository>> {
    if !config.enable_persistence {
        tracing::info!("High score persistence disabled");
        return Ok(Arc::new(InMemoryHighScoreRepo::new()));
    }

    let repository = match &config.save_data_dir {
        Some(dir) => FileHighScoreRepository::new(dir),
        None => FileHighScoreRepository::in_default_location(),
    }
    .context("failed to open high score storage")?;

    tracing::info!("High scores stored at {}", repository.path().display());
    Ok(Arc::new(repository))
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use game_core::GameMode;

    use super::*;

    #[tokio::test]
    async fn file_store_is_used_when_persistence_is_enabled() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = ClientConfig::default();
        config.save_data_dir = Some(dir.path().to_path_buf());

        let setup = RuntimeBuilder::new(config).build().await.expect("setup");
        let handle = setup.runtime.handle();
        handle.start(GameMode::Chase).await.expect("start");
        for _ in 0..10 {
            handle.step().await.expect("step");
        }

        let stored = FileHighScoreRepository::new(dir.path()).expect("repo");
        assert!(stored.load(GameMode::Chase.high_score_key()).expect("load") >= 1);
    }

    #[tokio::test]
    async fn memory_store_when_persistence_is_disabled() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = ClientConfig::default();
        config.enable_persistence = false;
        config.save_data_dir = Some(dir.path().join("unused"));

        let setup = RuntimeBuilder::new(config).build().await.expect("setup");
        assert_eq!(
            setup
                .runtime
                .handle()
                .high_score(GameMode::Snake)
                .await
                .expect("query"),
            0
        );
        assert!(!dir.path().join("unused").exists());
    }
}
