//! Header widget displaying mode, score, best and time.

use client_frontend_core::{PresentationMapper, view_model::Hud};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel.
///
/// Snake shows food points; the chase modes show survival time as the score.
pub fn render(frame: &mut Frame, area: Rect, hud: &Hud, theme: &RatatuiTheme) {
    let score_style = theme.emphasize(Style::default().fg(Color::Yellow));

    let mut spans = vec![
        Span::styled(
            hud.mode.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Score: ", theme.label()),
        Span::styled(hud.score_label.clone(), score_style),
        Span::styled("  Best: ", theme.label()),
        Span::styled(hud.high_score_label.clone(), theme.value()),
    ];

    if !hud.mode.is_chase() {
        spans.push(Span::styled("  Time: ", theme.label()));
        spans.push(Span::styled(hud.time.clone(), theme.value()));
    }

    if hud.paused && !hud.game_over {
        spans.push(Span::styled(
            "  [PAUSED]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" GRIDCHASE "),
    );

    frame.render_widget(paragraph, area);
}
