//! UI rendering entry point composing all widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};
use client_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Terminal columns drawn per tile.
pub const TILE_COLUMNS: u16 = 2;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    /// `None` until the first run has started.
    pub view_model: Option<&'a ViewModel>,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub ui: &'a UiConfig,
}

/// Screen regions of the in-game layout.
pub struct GameLayout {
    pub header: Rect,
    pub grid: Rect,
    pub status: Rect,
    pub messages: Rect,
    pub footer: Rect,
}

impl GameLayout {
    pub fn split(area: Rect, ui: &UiConfig) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Grid + side panel
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ui.side_panel_width),
            ])
            .split(rows[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ui.message_panel_height),
            ])
            .split(body[1]);

        Self {
            header: rows[0],
            grid: body[0],
            status: side[0],
            messages: side[1],
            footer: rows[2],
        }
    }
}

/// Width, in terminal columns, of the largest square grid that fits the grid
/// panel of a terminal of the given size. This is the viewport width the
/// runtime derives the tile count from.
pub fn grid_viewport_width(terminal_area: Rect, ui: &UiConfig) -> u32 {
    let grid = GameLayout::split(terminal_area, ui).grid;
    let inner_width = grid.width.saturating_sub(2);
    let inner_height = grid.height.saturating_sub(2);
    u32::from(inner_width.min(inner_height.saturating_mul(TILE_COLUMNS)))
}

/// Render the terminal UI for the current app mode.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let area = frame.area();
        match (&ctx.app_state.mode, ctx.view_model) {
            (AppMode::StartScreen, _) | (_, None) => {
                widgets::start_screen::render(frame, area, ctx.app_state, &theme);
            }
            (AppMode::Playing, Some(view_model)) => {
                render_game_ui(frame, ctx, view_model, &theme);
            }
            (AppMode::GameOver(summary), Some(view_model)) => {
                render_game_ui(frame, ctx, view_model, &theme);
                widgets::game_over::render(frame, centered_rect(50, 40, area), summary, &theme);
            }
        }
    })?;

    Ok(())
}

fn render_game_ui(
    frame: &mut ratatui::Frame,
    ctx: &RenderContext,
    view_model: &ViewModel,
    theme: &RatatuiTheme,
) {
    let layout = GameLayout::split(frame.area(), ctx.ui);

    widgets::header::render(frame, layout.header, &view_model.hud, theme);
    widgets::grid::render(frame, layout.grid, view_model, theme);
    widgets::status::render(frame, layout.status, &view_model.hud, theme);

    let visible = ctx.ui.message_panel_height.saturating_sub(2) as usize;
    let recent_messages: Vec<_> = ctx.messages.recent(visible).cloned().collect();
    widgets::messages::render(frame, layout.messages, &recent_messages, theme);

    widgets::footer::render(frame, layout.footer, &ctx.app_state.mode, theme);
}

/// Create a centered rectangle for modal overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Grid;

    #[test]
    fn viewport_is_limited_by_height() {
        let ui = UiConfig::default();
        // 120 columns wide, 40 rows: grid panel is 86x36, inner 84x34.
        let width = grid_viewport_width(Rect::new(0, 0, 120, 40), &ui);
        assert_eq!(width, 68);
    }

    #[test]
    fn viewport_is_limited_by_width() {
        let ui = UiConfig::default();
        // Grid panel is 46 columns wide, inner 44.
        let width = grid_viewport_width(Rect::new(0, 0, 80, 60), &ui);
        assert_eq!(width, 44);
    }

    #[test]
    fn derived_grid_fits_the_panel() {
        let ui = UiConfig::default();
        for (columns, rows) in [(120, 40), (80, 60), (200, 50), (60, 24)] {
            let area = Rect::new(0, 0, columns, rows);
            let width = grid_viewport_width(area, &ui);
            let tiles = Grid::from_viewport(width, u32::from(TILE_COLUMNS)).tile_count();

            let panel = GameLayout::split(area, &ui).grid;
            assert!(
                tiles * u32::from(TILE_COLUMNS) <= u32::from(panel.width - 2),
                "{columns}x{rows}: {tiles} tiles too wide"
            );
            assert!(
                tiles <= u32::from(panel.height - 2),
                "{columns}x{rows}: {tiles} tiles too tall"
            );
        }
    }

    #[test]
    fn tiny_terminal_yields_zero() {
        let ui = UiConfig::default();
        assert_eq!(grid_viewport_width(Rect::new(0, 0, 10, 4), &ui), 0);
    }
}
