//! Ratatui theme implementation of PresentationMapper.
//!
//! Every tile is drawn two columns wide so the grid looks square in a
//! typical terminal font.

use client_frontend_core::{Cell, MessageLevel, PresentationMapper};
use game_core::EffectKind;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn render_cell(&self, cell: Cell) -> (&'static str, Self::Style) {
        match cell {
            Cell::Empty => (" .", Style::default().fg(Color::DarkGray)),
            Cell::Food => (" *", Style::default().fg(Color::LightRed)),
            Cell::SpeedBoost => (" >", Style::default().fg(Color::LightYellow)),
            Cell::Freeze => (" #", Style::default().fg(Color::LightCyan)),
            Cell::SnakeBody => ("[]", Style::default().fg(Color::Green)),
            Cell::SnakeHead => (
                "[]",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Pursuer => (
                "XX",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Cell::Player => (
                "@@",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Highlight => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn style_effect(&self, kind: EffectKind) -> Self::Style {
        match kind {
            EffectKind::SpeedBoost => Style::default().fg(Color::LightYellow),
            EffectKind::Freeze => Style::default().fg(Color::LightCyan),
        }
    }

    fn emphasize(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_glyph_is_two_columns() {
        let theme = RatatuiTheme::new();
        for cell in [
            Cell::Empty,
            Cell::Food,
            Cell::SpeedBoost,
            Cell::Freeze,
            Cell::SnakeBody,
            Cell::SnakeHead,
            Cell::Pursuer,
            Cell::Player,
        ] {
            assert_eq!(theme.render_cell(cell).0.chars().count(), 2, "{cell:?}");
        }
    }
}
