//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the grid, actors,
//! collectibles and run bookkeeping, plus the run-start initializer. Runtime
//! layers clone or query this state but advance it exclusively through the
//! engine.
pub mod types;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::engine::{GameOverReason, spawn};
use crate::env::{PcgRng, RngOracle};
use crate::mode::GameMode;

pub use types::{
    ActiveEffect, CardinalDirection, EffectKind, Grid, Item, ItemKind, PlayerState, Position,
    Pursuer, Snake,
};

/// Canonical snapshot of one run.
///
/// Fields that do not apply to the current [`GameMode`] stay empty (no
/// pursuers in snake mode, no snake in the chase modes).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub mode: GameMode,
    /// RNG seed for spawn placement. Set once at run start.
    pub game_seed: u64,
    pub grid: Grid,
    pub player: PlayerState,
    pub snake: Snake,
    pub pursuers: ArrayVec<Pursuer, { GameConfig::MAX_PURSUERS }>,
    /// Power-up items on the grid (swarm mode).
    pub items: ArrayVec<Item, { GameConfig::MAX_ITEMS }>,
    /// The single food tile (snake mode). `None` only when the grid is full.
    pub food: Option<Item>,
    pub effect: Option<ActiveEffect>,
    /// Points from food (snake mode).
    pub score: u64,
    pub elapsed_ticks: u64,
    /// Whole seconds survived, refreshed every [`GameConfig::TICKS_PER_SECOND`] ticks.
    pub time_survived: u64,
    pub high_score: u64,
    pub paused: bool,
    /// Set on the terminal transition; the run never resumes afterwards.
    pub game_over: Option<GameOverReason>,
    /// Current scheduler period. Only snake mode changes it mid-run.
    pub tick_period_ms: u64,
}

impl GameState {
    /// Starts a run on a grid derived from the drawing area width.
    pub fn from_viewport(
        mode: GameMode,
        viewport_width: u32,
        config: &GameConfig,
        game_seed: u64,
    ) -> Self {
        let grid = Grid::from_viewport(viewport_width, config.tile_size);
        Self::init(mode, grid, config, game_seed)
    }

    /// Starts a run: places every entity and resets score, timer, directions
    /// and effects. Called once per run start, never mid-run.
    pub fn init(mode: GameMode, grid: Grid, config: &GameConfig, game_seed: u64) -> Self {
        Self::init_with_rng(mode, grid, config, game_seed, &PcgRng)
    }

    pub fn init_with_rng(
        mode: GameMode,
        grid: Grid,
        config: &GameConfig,
        game_seed: u64,
        rng: &dyn RngOracle,
    ) -> Self {
        let mut state = Self {
            mode,
            game_seed,
            grid,
            player: PlayerState::default(),
            snake: Snake::default(),
            pursuers: ArrayVec::new(),
            items: ArrayVec::new(),
            food: None,
            effect: None,
            score: 0,
            elapsed_ticks: 0,
            time_survived: 0,
            high_score: 0,
            paused: false,
            game_over: None,
            tick_period_ms: config.tick_period_ms,
        };

        match mode {
            GameMode::Chase | GameMode::Swarm => {
                state.player = PlayerState::new(grid.fraction(1, 4));
                state.pursuers.push(Pursuer::new(
                    grid.fraction(3, 4),
                    config.pursuer_move_frequency,
                ));
            }
            GameMode::Snake => {
                let head = grid.fraction(1, 2);
                let heading = CardinalDirection::Up;
                state.snake = Snake::straight(head, heading, GameConfig::SNAKE_INITIAL_LENGTH);
                state.player = PlayerState::new(head).heading(heading);
                state.food = spawn::free_tile(&state, rng).map(Item::food);
            }
        }

        state
    }

    /// Carries a previously persisted best score into the run.
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self
    }

    /// Buffers a direction for the next tick.
    ///
    /// In snake mode a direction opposite the *committed* heading is rejected
    /// (the pending buffer is left untouched). Returns whether it was accepted.
    pub fn queue_direction(&mut self, direction: CardinalDirection) -> bool {
        if self.game_over.is_some() {
            return false;
        }
        if self.mode == GameMode::Snake
            && self.player.direction.map(CardinalDirection::opposite) == Some(direction)
        {
            return false;
        }
        self.player.pending = Some(direction);
        true
    }

    /// Returns `true` if the gate changed.
    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        true
    }

    /// Lifts the pause gate. A finished run cannot be resumed.
    pub fn resume(&mut self) -> bool {
        if !self.paused || self.game_over.is_some() {
            return false;
        }
        self.paused = false;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// The measure compared against the high score: survival seconds in the
    /// chase modes, food points in snake mode.
    pub fn score_value(&self) -> u64 {
        if self.mode.is_chase() {
            self.time_survived
        } else {
            self.score
        }
    }

    pub fn is_frozen(&self) -> bool {
        matches!(
            self.effect,
            Some(ActiveEffect {
                kind: EffectKind::Freeze,
                ..
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chase_places_actors_at_quarter_points() {
        let state = GameState::init(GameMode::Chase, Grid::new(20), &GameConfig::default(), 1);
        assert_eq!(state.player.position, Position::new(5, 5));
        assert_eq!(state.pursuers.len(), 1);
        assert_eq!(state.pursuers[0].position, Position::new(15, 15));
        assert_eq!(state.pursuers[0].move_frequency, 3);
        assert_eq!(state.player.direction, None);
        assert!(!state.paused);
        assert!(state.snake.is_empty());
    }

    #[test]
    fn snake_starts_heading_up_with_food_off_body() {
        let state = GameState::init(GameMode::Snake, Grid::new(20), &GameConfig::default(), 9);
        assert_eq!(state.snake.len(), GameConfig::SNAKE_INITIAL_LENGTH);
        assert_eq!(state.snake.head(), Some(Position::new(10, 10)));
        assert_eq!(state.player.direction, Some(CardinalDirection::Up));
        let food = state.food.expect("food placed");
        assert!(state.grid.contains(food.position));
        assert!(!state.snake.contains(food.position));
        assert!(state.pursuers.is_empty());
    }

    #[test]
    fn viewport_initializer_derives_grid() {
        let state =
            GameState::from_viewport(GameMode::Swarm, 400, &GameConfig::default(), 0);
        assert_eq!(state.grid.tile_count(), 20);
        assert_eq!(state.tick_period_ms, GameConfig::DEFAULT_TICK_PERIOD_MS);
    }

    #[test]
    fn snake_rejects_reversal_against_committed_heading() {
        let mut state =
            GameState::init(GameMode::Snake, Grid::new(20), &GameConfig::default(), 3);
        assert!(!state.queue_direction(CardinalDirection::Down));
        assert_eq!(state.player.pending, Some(CardinalDirection::Up));

        // Left is accepted, but Down is still a reversal of the committed Up.
        assert!(state.queue_direction(CardinalDirection::Left));
        assert!(!state.queue_direction(CardinalDirection::Down));
        assert_eq!(state.player.pending, Some(CardinalDirection::Left));
    }

    #[test]
    fn chase_accepts_any_direction() {
        let mut state =
            GameState::init(GameMode::Chase, Grid::new(20), &GameConfig::default(), 3);
        assert!(state.queue_direction(CardinalDirection::Left));
        assert!(state.queue_direction(CardinalDirection::Right));
        assert_eq!(state.player.pending, Some(CardinalDirection::Right));
    }

    #[test]
    fn finished_run_cannot_resume() {
        let mut state =
            GameState::init(GameMode::Chase, Grid::new(20), &GameConfig::default(), 3);
        assert!(state.toggle_pause());
        assert!(state.paused);
        assert!(state.toggle_pause());
        assert!(!state.paused);

        state.paused = true;
        state.game_over = Some(GameOverReason::Captured);
        assert!(!state.resume());
        assert!(!state.queue_direction(CardinalDirection::Up));
    }
}
