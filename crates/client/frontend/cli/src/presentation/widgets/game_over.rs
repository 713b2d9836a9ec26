//! Game-over overlay drawn on top of the final snapshot.

use game_core::GameOverReason;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::start_screen::record_label;
use crate::{presentation::theme::RatatuiTheme, state::GameOverSummary};

pub fn render(frame: &mut Frame, area: Rect, summary: &GameOverSummary, theme: &RatatuiTheme) {
    let score_name = if summary.mode.is_chase() {
        "Survived"
    } else {
        "Score"
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline(summary.reason),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{score_name}: "), theme.label()),
            Span::styled(
                record_label(summary.mode, summary.final_score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", theme.label()),
            Span::styled(record_label(summary.mode, summary.high_score), theme.value()),
        ]),
    ];

    if summary.new_record {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" restart  ", theme.label()),
        Span::styled("m", theme.key_hint()),
        Span::styled(" menu", theme.label()),
    ]));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed))
            .title(" Game Over ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn headline(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::Captured => "Caught by a pursuer!",
        GameOverReason::HitWall => "The snake hit the wall!",
        GameOverReason::HitSelf => "The snake bit itself!",
    }
}
