//! GRIDCHASE game client binary.
//!
//! Composition root that assembles:
//! 1. Runtime (tick scheduler and high scores) via RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! GAME_MODE=snake cargo run -p gridchase-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, TILE_COLUMNS, logging};
    use gridchase_client::Client;

    // 1. Load configuration from environment
    // The renderer decides how many columns a tile takes.
    let client_config = ClientConfig::from_env().with_tile_size(u32::from(TILE_COLUMNS));
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging()?;

    tracing::info!("Starting GRIDCHASE client");
    tracing::info!("Mode: {}", client_config.runtime.mode);
    tracing::info!("Tick period: {} ms", client_config.runtime.game_config.tick_period_ms);
    tracing::info!("Persistence: {}", client_config.enable_persistence);

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new(client_config).build().await?;
    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build Client (composition layer) and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
