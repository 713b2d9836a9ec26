//! Grid widget drawing the tiles of the current snapshot.

use client_frontend_core::{PresentationMapper, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{theme::RatatuiTheme, ui::TILE_COLUMNS};

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let lines: Vec<Line> = view_model
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| {
                        let (glyph, style) = theme.render_cell(*cell);
                        Span::styled(glyph, style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    // Shrink the block around the grid so the border hugs the playfield.
    let width = (view_model.tile_count as u16)
        .saturating_mul(TILE_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = (view_model.tile_count as u16)
        .saturating_add(2)
        .min(area.height);
    let framed = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let title = format!(" {0}x{0} ", view_model.tile_count);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(title),
    );

    frame.render_widget(paragraph, framed);
}
