//! Message log panel, newest entry on top.

use client_frontend_core::{PresentationMapper, message::MessageEntry};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = messages
        .iter()
        .map(|entry| {
            let mut spans = Vec::with_capacity(2);
            if let Some(tick) = entry.tick {
                spans.push(Span::styled(format!("[{tick}] "), theme.label()));
            }
            spans.push(Span::styled(
                entry.text.clone(),
                theme.style_message(entry.level),
            ));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Messages "),
    );

    frame.render_widget(paragraph, area);
}
