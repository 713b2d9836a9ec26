//! Footer widget with key hints for the current screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{presentation::theme::RatatuiTheme, state::AppMode};

pub fn render(frame: &mut Frame, area: Rect, mode: &AppMode, theme: &RatatuiTheme) {
    let hints: &[(&str, &str)] = match mode {
        AppMode::StartScreen => &[("↑/↓", "Select"), ("Enter", "Start"), ("q/Esc", "Quit")],
        AppMode::Playing => &[("←↑↓→/WASD", "Move"), ("p", "Pause"), ("q/Esc", "Quit")],
        AppMode::GameOver(_) => &[("Enter/Space", "Restart"), ("m", "Menu"), ("q/Esc", "Quit")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, theme.key_hint()),
                Span::styled(format!(" {label}  "), theme.label()),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
