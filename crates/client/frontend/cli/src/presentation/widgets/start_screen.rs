//! Start screen widget: mode menu with stored records.

use client_frontend_core::format_time;
use game_core::GameMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;

use crate::{presentation::theme::RatatuiTheme, state::AppState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Mode menu
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0], theme);
    render_menu(frame, chunks[1], state, theme);
    render_footer(frame, chunks[2], theme);
}

fn render_title(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "GRIDCHASE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Three grid arcade games",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );

    frame.render_widget(title, area);
}

fn render_menu(frame: &mut Frame, area: Rect, state: &AppState, theme: &RatatuiTheme) {
    let items: Vec<ListItem> = GameMode::iter()
        .enumerate()
        .map(|(index, mode)| {
            let is_selected = state.selected == mode;
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{}. ", index + 1), theme.label()),
                Span::styled(format!("{:<8}", mode.title()), name_style),
                Span::styled(description(mode), theme.label()),
                Span::styled(
                    format!("  best {}", record_label(mode, state.high_score(mode))),
                    if is_selected {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    },
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Choose Game ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("↑/↓", theme.key_hint()),
            Span::styled(" Navigate  ", theme.label()),
            Span::styled("1-3", theme.key_hint()),
            Span::styled(" Pick  ", theme.label()),
            Span::styled("Enter", theme.key_hint()),
            Span::styled(" Start  ", theme.label()),
            Span::styled("q/Esc", theme.key_hint()),
            Span::styled(" Quit", theme.label()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}

fn description(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Chase => "evade the hunter",
        GameMode::Snake => "eat and grow",
        GameMode::Swarm => "survive the swarm",
    }
}

/// Survival time for the chase modes, points for snake.
pub fn record_label(mode: GameMode, value: u64) -> String {
    if mode.is_chase() {
        format_time(value)
    } else {
        value.to_string()
    }
}
