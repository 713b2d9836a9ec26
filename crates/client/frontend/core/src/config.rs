//! Frontend configuration structures and loaders.
//!
//! UI-specific configuration shared across frontend implementations.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    /// Redraw cadence while nothing changes, in milliseconds.
    pub frame_interval_ms: u64,
}

impl FrontendConfig {
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;

    pub fn new(messages: MessageConfig) -> Self {
        Self {
            messages,
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `CLI_FRAME_MS` - Idle redraw interval (default: 33)
    /// - `SHOW_PICKUP_MESSAGES` - Log food and item pickups (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::new(MessageConfig::default());

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(interval) = read_env::<u64>("CLI_FRAME_MS") {
            config.frame_interval_ms = interval.max(1);
        }

        if let Some(show) = read_env_bool("SHOW_PICKUP_MESSAGES") {
            config.messages.show_pickups = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Log food and item pickups.
    pub show_pickups: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_pickups: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
