//! Client runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::{GameConfig, GameMode};
use runtime::RuntimeConfig;

/// Configuration required to bootstrap a client runtime and UI.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut runtime = RuntimeConfig::default();
        runtime.game_config = runtime
            .game_config
            .with_tile_size(Self::DEFAULT_TILE_SIZE);
        runtime.viewport_width = Self::DEFAULT_TILE_SIZE * 20;
        Self {
            runtime,
            enable_persistence: true,
            save_data_dir: None,
        }
    }
}

impl ClientConfig {
    /// Terminal columns per tile. Cells are roughly twice as tall as they are
    /// wide, so two columns draw a square tile.
    pub const DEFAULT_TILE_SIZE: u32 = 2;

    pub fn new(runtime: RuntimeConfig) -> Self {
        Self {
            runtime,
            ..Self::default()
        }
    }

    /// Use the frontend's tile width. The grid is derived from it, so it must
    /// match what the renderer draws per tile.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.runtime.game_config = self.runtime.game_config.with_tile_size(tile_size);
        self.runtime.viewport_width = self.runtime.game_config.tile_size * 20;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_MODE` - `chase` (alias `escape`), `snake` or `swarm` (default: chase)
    /// - `TICK_MS` - Tick period at run start in ms (default: 100, minimum 50)
    /// - `PURSUER_MOVE_FREQUENCY` - Ticks between moves of the first pursuer (default: 3)
    /// - `GAME_SEED` - Fixed seed for every run (default: random per run)
    /// - `ENABLE_PERSISTENCE` - Store high scores on disk (default: true)
    /// - `SAVE_DATA_DIR` - Directory for the high score file (default: platform-specific)
    /// - `RUNTIME_EVENT_BUFFER` - Per-topic event buffer (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_owned());
        let mut config = Self::default();

        if let Some(value) = read("GAME_MODE") {
            match value.parse::<GameMode>() {
                Ok(mode) => config.runtime.mode = mode,
                Err(_) => tracing::warn!("Ignoring unknown GAME_MODE '{}'", value),
            }
        }

        let mut game_config: GameConfig = config.runtime.game_config.clone();
        if let Some(period) = read("TICK_MS").and_then(|v| v.parse::<u64>().ok()) {
            game_config = game_config.with_tick_period_ms(period);
        }
        if let Some(frequency) =
            read("PURSUER_MOVE_FREQUENCY").and_then(|v| v.parse::<u32>().ok())
        {
            game_config = game_config.with_pursuer_move_frequency(frequency);
        }
        config.runtime.game_config = game_config;

        config.runtime.seed = read("GAME_SEED").and_then(|v| v.parse().ok());

        if let Some(capacity) = read("RUNTIME_EVENT_BUFFER").and_then(|v| v.parse::<usize>().ok())
        {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        if let Some(enable) = read("ENABLE_PERSISTENCE").and_then(|v| parse_bool(&v)) {
            config.enable_persistence = enable;
        }

        config.save_data_dir = read("SAVE_DATA_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
