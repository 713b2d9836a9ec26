//! Status panel: actors, active effect and tick speed.

use client_frontend_core::{PresentationMapper, view_model::Hud};
use game_core::{EffectKind, GameMode};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, hud: &Hud, theme: &RatatuiTheme) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Time      ", theme.label()),
        Span::styled(hud.time.clone(), theme.value()),
    ])];

    match hud.mode {
        GameMode::Snake => {
            lines.push(Line::from(vec![
                Span::styled("Step      ", theme.label()),
                Span::styled(format!("{} ms", hud.tick_period_ms), theme.value()),
            ]));
        }
        GameMode::Chase | GameMode::Swarm => {
            lines.push(Line::from(vec![
                Span::styled("Pursuers  ", theme.label()),
                Span::styled(hud.pursuers.to_string(), theme.value()),
            ]));
        }
    }

    if hud.mode == GameMode::Swarm {
        let effect = match hud.effect {
            Some((kind, remaining)) => Span::styled(
                format!("{} ({remaining})", effect_label(kind)),
                theme.emphasize(theme.style_effect(kind)),
            ),
            None => Span::styled("none", theme.label()),
        };
        lines.push(Line::from(vec![Span::styled("Effect    ", theme.label()), effect]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Status "),
    );

    frame.render_widget(paragraph, area);
}

fn effect_label(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::SpeedBoost => "Speed boost",
        EffectKind::Freeze => "Freeze",
    }
}
