//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_SIDE_PANEL_WIDTH` - Width of the status/message column (default: 34)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 12)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("CLI_SIDE_PANEL_WIDTH") {
            config.ui.side_panel_width = width.max(UiConfig::MIN_SIDE_PANEL_WIDTH);
        }

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub side_panel_width: u16,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl UiConfig {
    pub const MIN_SIDE_PANEL_WIDTH: u16 = 20;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            side_panel_width: 34,
            message_panel_height: 12,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
