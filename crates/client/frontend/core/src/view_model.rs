//! View-model snapshots derived from [`game_core::GameState`].
use game_core::{EffectKind, GameMode, GameState, ItemKind, Position};

use crate::format::format_time;

/// What occupies one tile, in draw priority order (player on top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cell {
    Empty,
    Food,
    SpeedBoost,
    Freeze,
    SnakeBody,
    SnakeHead,
    Pursuer,
    Player,
}

/// Values shown around the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub mode: GameMode,
    /// Food points in snake mode, survival time otherwise.
    pub score_label: String,
    pub high_score_label: String,
    pub time: String,
    pub pursuers: usize,
    pub effect: Option<(EffectKind, u32)>,
    pub paused: bool,
    pub game_over: bool,
    pub tick_period_ms: u64,
}

/// High-level snapshot of the game used by presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub tile_count: u32,
    /// Row-major, `tile_count * tile_count` cells.
    pub cells: Vec<Cell>,
    pub hud: Hud,
}

impl ViewModel {
    pub fn from_state(state: &GameState) -> Self {
        let tile_count = state.grid.tile_count();
        let mut cells = vec![Cell::Empty; state.grid.area()];

        let mut paint = |position: Position, cell: Cell| {
            if !state.grid.contains(position) {
                return;
            }
            let index = position.y as usize * tile_count as usize + position.x as usize;
            if cells[index] < cell {
                cells[index] = cell;
            }
        };

        if let Some(food) = state.food {
            paint(food.position, Cell::Food);
        }
        for item in &state.items {
            let cell = match item.kind {
                ItemKind::Food => Cell::Food,
                ItemKind::SpeedBoost => Cell::SpeedBoost,
                ItemKind::Freeze => Cell::Freeze,
            };
            paint(item.position, cell);
        }
        for (index, segment) in state.snake.segments().enumerate() {
            let cell = if index == 0 {
                Cell::SnakeHead
            } else {
                Cell::SnakeBody
            };
            paint(*segment, cell);
        }
        for pursuer in &state.pursuers {
            paint(pursuer.position, Cell::Pursuer);
        }
        if state.mode.is_chase() {
            paint(state.player.position, Cell::Player);
        }

        Self {
            tile_count,
            cells,
            hud: Hud::from_state(state),
        }
    }

    pub fn cell(&self, x: u32, y: u32) -> Cell {
        if x >= self.tile_count || y >= self.tile_count {
            return Cell::Empty;
        }
        self.cells[(y * self.tile_count + x) as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.tile_count.max(1) as usize)
    }
}

impl Hud {
    fn from_state(state: &GameState) -> Self {
        let (score_label, high_score_label) = if state.mode.is_chase() {
            (
                format_time(state.time_survived),
                format_time(state.high_score),
            )
        } else {
            (state.score.to_string(), state.high_score.to_string())
        };

        Self {
            mode: state.mode,
            score_label,
            high_score_label,
            time: format_time(state.time_survived),
            pursuers: state.pursuers.len(),
            effect: state
                .effect
                .map(|effect| (effect.kind, effect.remaining_ticks)),
            paused: state.paused,
            game_over: state.is_over(),
            tick_period_ms: state.tick_period_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GameConfig, Grid, Item};

    use super::*;

    #[test]
    fn chase_grid_marks_player_and_pursuer() {
        let state = GameState::init(GameMode::Chase, Grid::new(8), &GameConfig::default(), 0);
        let view = ViewModel::from_state(&state);

        assert_eq!(view.cells.len(), 64);
        assert_eq!(view.cell(2, 2), Cell::Player);
        assert_eq!(view.cell(6, 6), Cell::Pursuer);
        assert_eq!(view.cell(0, 0), Cell::Empty);
        assert_eq!(view.rows().count(), 8);
        assert_eq!(view.hud.score_label, "00:00");
    }

    #[test]
    fn player_draws_over_items() {
        let mut state = GameState::init(GameMode::Swarm, Grid::new(8), &GameConfig::default(), 0);
        state
            .items
            .push(Item::new(state.player.position, ItemKind::Freeze));
        state.items.push(Item::new(Position::new(0, 7), ItemKind::SpeedBoost));

        let view = ViewModel::from_state(&state);
        assert_eq!(view.cell(2, 2), Cell::Player);
        assert_eq!(view.cell(0, 7), Cell::SpeedBoost);
    }

    #[test]
    fn snake_hud_shows_points() {
        let mut state = GameState::init(GameMode::Snake, Grid::new(10), &GameConfig::default(), 4)
            .with_high_score(70);
        state.score = 30;
        let view = ViewModel::from_state(&state);

        assert_eq!(view.cell(5, 5), Cell::SnakeHead);
        assert_eq!(view.cell(5, 6), Cell::SnakeBody);
        assert_eq!(view.hud.score_label, "30");
        assert_eq!(view.hud.high_score_label, "70");
        assert_eq!(
            view.cells.iter().filter(|c| **c == Cell::Food).count(),
            1
        );
    }
}
