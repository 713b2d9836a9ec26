//! Fixed-step tick pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Each
//! call to [`GameEngine::step`] advances the run by exactly one tick and
//! reports what happened. Movement and collision live in the per-mode phase
//! modules; this module sequences them and owns the clock and the high score.

mod chase;
mod events;
mod snake;
pub(crate) mod spawn;
mod swarm;

pub use events::{GameOverReason, TickEvent};

use crate::config::GameConfig;
use crate::env::{PcgRng, RngOracle};
use crate::mode::GameMode;
use crate::state::{CardinalDirection, GameState};

/// Input sampled by the scheduler for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickInput {
    pub direction: Option<CardinalDirection>,
}

impl TickInput {
    pub const fn none() -> Self {
        Self { direction: None }
    }

    pub const fn direction(direction: CardinalDirection) -> Self {
        Self {
            direction: Some(direction),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickOutcome {
    Continue,
    GameOver(GameOverReason),
}

/// Complete result of one call to [`GameEngine::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub events: Vec<TickEvent>,
    /// `false` when the gate was closed (paused or finished) and nothing ran.
    pub advanced: bool,
}

impl TickReport {
    pub fn idle() -> Self {
        Self {
            outcome: TickOutcome::Continue,
            events: Vec::new(),
            advanced: false,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.outcome, TickOutcome::GameOver(_))
    }

    pub fn new_high_score(&self) -> Option<u64> {
        self.events.iter().find_map(|event| match event {
            TickEvent::NewHighScore { value } => Some(*value),
            _ => None,
        })
    }
}

/// Game engine that advances a run one tick at a time.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine using the default [`PcgRng`] oracle.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state, rng: &PcgRng }
    }

    pub fn with_rng(state: &'a mut GameState, rng: &'a dyn RngOracle) -> Self {
        Self { state, rng }
    }

    /// Runs the tick pipeline once.
    ///
    /// A paused or finished run is left untouched and yields
    /// [`TickReport::idle`]. A terminal collision stops the pipeline on the
    /// spot: later phases do not run on that tick.
    pub fn step(&mut self, input: TickInput) -> TickReport {
        if self.state.paused || self.state.is_over() {
            return TickReport::idle();
        }

        let mut events = Vec::new();

        if let Some(direction) = input.direction {
            self.state.queue_direction(direction);
        }
        self.state.player.commit();

        let collision = match self.state.mode {
            GameMode::Snake => snake::advance(self.state, self.rng, &mut events),
            GameMode::Chase | GameMode::Swarm => chase::advance(self.state),
        };
        if let Some(reason) = collision {
            return self.finish(reason, events);
        }

        let second_elapsed = self.tick_clock();

        if self.state.mode == GameMode::Swarm {
            if second_elapsed {
                swarm::spawn_on_schedule(self.state, self.rng, &mut events);
            }
            swarm::resolve_power_ups(self.state, &mut events);
        }

        self.update_high_score(&mut events);

        TickReport {
            outcome: TickOutcome::Continue,
            events,
            advanced: true,
        }
    }

    /// Advances the tick counter. Returns `true` on ticks where
    /// `time_survived` moves to a new whole second.
    fn tick_clock(&mut self) -> bool {
        self.state.elapsed_ticks += 1;
        if self.state.elapsed_ticks % GameConfig::TICKS_PER_SECOND != 0 {
            return false;
        }
        self.state.time_survived = self.state.elapsed_ticks / GameConfig::TICKS_PER_SECOND;
        true
    }

    fn update_high_score(&mut self, events: &mut Vec<TickEvent>) {
        let value = self.state.score_value();
        if value > self.state.high_score {
            self.state.high_score = value;
            events.push(TickEvent::NewHighScore { value });
        }
    }

    fn finish(&mut self, reason: GameOverReason, mut events: Vec<TickEvent>) -> TickReport {
        self.state.paused = true;
        self.state.game_over = Some(reason);
        events.push(TickEvent::GameOver {
            reason,
            final_score: self.state.score_value(),
        });
        TickReport {
            outcome: TickOutcome::GameOver(reason),
            events,
            advanced: true,
        }
    }
}

/// Pure form of [`GameEngine::step`]: returns the next state instead of
/// mutating in place.
pub fn advance(state: &GameState, input: TickInput) -> (GameState, TickReport) {
    let mut next = state.clone();
    let report = GameEngine::new(&mut next).step(input);
    (next, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        ActiveEffect, EffectKind, Grid, Item, ItemKind, Position, Pursuer, Snake,
    };

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn run(state: &mut GameState, ticks: usize) -> Vec<TickReport> {
        (0..ticks)
            .map(|_| GameEngine::new(state).step(TickInput::none()))
            .collect()
    }

    fn all_in_bounds(state: &GameState) -> bool {
        state.grid.contains(state.player.position)
            && state.pursuers.iter().all(|p| state.grid.contains(p.position))
            && state.snake.segments().all(|s| state.grid.contains(*s))
    }

    #[test]
    fn stationary_player_is_captured_on_tick_thirty() {
        let mut state = GameState::init(GameMode::Chase, Grid::new(20), &config(), 1);

        let reports = run(&mut state, 29);
        assert!(reports.iter().all(|r| r.outcome == TickOutcome::Continue));
        assert_eq!(state.pursuers[0].position, Position::new(6, 6));
        assert_eq!(state.time_survived, 2);

        let report = GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(report.outcome, TickOutcome::GameOver(GameOverReason::Captured));
        assert!(state.paused);
        assert_eq!(state.game_over, Some(GameOverReason::Captured));
        // Capture halts the pipeline before the clock moves.
        assert_eq!(state.elapsed_ticks, 29);
        assert!(matches!(
            report.events.last(),
            Some(TickEvent::GameOver {
                reason: GameOverReason::Captured,
                final_score: 2
            })
        ));
    }

    #[test]
    fn chase_player_is_clamped_at_walls() {
        let mut state = GameState::init(GameMode::Chase, Grid::new(20), &config(), 1);
        state.pursuers[0].move_frequency = u32::MAX;

        for _ in 0..40 {
            GameEngine::new(&mut state).step(TickInput::direction(CardinalDirection::Left));
            assert!(all_in_bounds(&state));
        }
        assert_eq!(state.player.position, Position::new(0, 5));
    }

    #[test]
    fn time_survived_updates_every_ten_ticks() {
        let mut state = GameState::init(GameMode::Chase, Grid::new(20), &config(), 1);
        state.pursuers[0].move_frequency = u32::MAX;

        run(&mut state, 9);
        assert_eq!(state.time_survived, 0);
        run(&mut state, 1);
        assert_eq!(state.time_survived, 1);
        assert_eq!(state.high_score, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn paused_run_does_not_advance() {
        let mut state = GameState::init(GameMode::Chase, Grid::new(20), &config(), 1);
        state.pause();
        let before = state.clone();

        let report = GameEngine::new(&mut state).step(TickInput::direction(CardinalDirection::Up));
        assert_eq!(report, TickReport::idle());
        assert_eq!(state, before);
    }

    #[test]
    fn finished_run_stays_finished() {
        let mut state = GameState::init(GameMode::Chase, Grid::new(20), &config(), 1);
        run(&mut state, 30);
        assert!(state.is_over());
        let snapshot = state.clone();

        assert!(!state.resume());
        let report = GameEngine::new(&mut state).step(TickInput::none());
        assert!(!report.advanced);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn snake_grows_on_food() {
        let mut state = GameState::init(GameMode::Snake, Grid::new(20), &config(), 5);
        state.food = Some(Item::food(Position::new(10, 9)));

        let report = GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(report.outcome, TickOutcome::Continue);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.head(), Some(Position::new(10, 9)));
        let food = state.food.expect("food respawned");
        assert!(!state.snake.contains(food.position));
        assert_eq!(state.tick_period_ms, 98);
        assert!(report.events.contains(&TickEvent::FoodEaten {
            position: Position::new(10, 9),
            score: 10,
        }));
        assert!(report.events.contains(&TickEvent::NewHighScore { value: 10 }));
    }

    #[test]
    fn snake_moves_without_growing() {
        let mut state = GameState::init(GameMode::Snake, Grid::new(20), &config(), 5);
        state.food = Some(Item::food(Position::new(0, 0)));

        GameEngine::new(&mut state).step(TickInput::direction(CardinalDirection::Left));
        let segments: Vec<_> = state.snake.segments().copied().collect();
        assert_eq!(
            segments,
            [Position::new(9, 10), Position::new(10, 10), Position::new(10, 11)]
        );
        assert_eq!(state.player.position, Position::new(9, 10));
    }

    #[test]
    fn snake_hits_wall() {
        let mut state = GameState::init(GameMode::Snake, Grid::new(20), &config(), 5);
        state.food = Some(Item::food(Position::new(0, 19)));

        let reports = run(&mut state, 10);
        assert_eq!(state.snake.head(), Some(Position::new(10, 0)));
        assert!(reports.iter().all(|r| r.outcome == TickOutcome::Continue));

        let report = GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(report.outcome, TickOutcome::GameOver(GameOverReason::HitWall));
        assert!(state.paused);
        assert_eq!(state.snake.len(), 3);
    }

    fn coiled_snake(segments: &[Position], heading: CardinalDirection) -> GameState {
        let mut state = GameState::init(GameMode::Snake, Grid::new(20), &config(), 5);
        state.snake = Snake::new(segments.iter().copied());
        state.player = crate::state::PlayerState::new(segments[0]).heading(heading);
        state.food = Some(Item::food(Position::new(0, 0)));
        state
    }

    #[test]
    fn snake_hits_its_body() {
        let mut state = coiled_snake(
            &[
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
                Position::new(4, 6),
            ],
            CardinalDirection::Left,
        );

        let report = GameEngine::new(&mut state).step(TickInput::direction(CardinalDirection::Down));
        assert_eq!(report.outcome, TickOutcome::GameOver(GameOverReason::HitSelf));
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn snake_tail_tile_counts_as_body() {
        let mut state = coiled_snake(
            &[
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
            ],
            CardinalDirection::Up,
        );

        let report = GameEngine::new(&mut state).step(TickInput::direction(CardinalDirection::Right));
        assert_eq!(report.outcome, TickOutcome::GameOver(GameOverReason::HitSelf));
    }

    #[test]
    fn snake_reversal_is_ignored() {
        let mut state = GameState::init(GameMode::Snake, Grid::new(20), &config(), 5);
        state.food = Some(Item::food(Position::new(0, 0)));

        let report = GameEngine::new(&mut state).step(TickInput::direction(CardinalDirection::Down));
        assert_eq!(report.outcome, TickOutcome::Continue);
        assert_eq!(state.player.direction, Some(CardinalDirection::Up));
        assert_eq!(state.snake.head(), Some(Position::new(10, 9)));
    }

    #[test]
    fn snake_speed_ramp_has_a_floor() {
        let mut state = GameState::init(GameMode::Snake, Grid::new(20), &config(), 5);
        state.tick_period_ms = GameConfig::MIN_TICK_PERIOD_MS + 1;
        state.food = Some(Item::food(Position::new(10, 9)));

        let report = GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(state.tick_period_ms, GameConfig::MIN_TICK_PERIOD_MS);
        assert!(report.events.contains(&TickEvent::SpeedIncreased {
            tick_period_ms: GameConfig::MIN_TICK_PERIOD_MS
        }));

        state.food = Some(Item::food(Position::new(10, 8)));
        let report = GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(state.tick_period_ms, GameConfig::MIN_TICK_PERIOD_MS);
        assert!(
            !report
                .events
                .iter()
                .any(|e| matches!(e, TickEvent::SpeedIncreased { .. }))
        );
    }

    #[test]
    fn high_score_never_decreases() {
        let mut state = GameState::init(GameMode::Chase, Grid::new(20), &config(), 1)
            .with_high_score(2);
        state.pursuers[0].move_frequency = u32::MAX;

        let mut last = state.high_score;
        let mut raised = 0;
        for _ in 0..50 {
            let report = GameEngine::new(&mut state).step(TickInput::none());
            assert!(state.high_score >= last);
            if let Some(value) = report.new_high_score() {
                assert_eq!(value, state.high_score);
                raised += 1;
            }
            last = state.high_score;
        }
        // Seconds 3, 4 and 5 beat the stored 2.
        assert_eq!(raised, 3);
        assert_eq!(state.high_score, 5);
    }

    #[test]
    fn freeze_holds_pursuers_for_thirty_ticks() {
        let mut state = GameState::init(GameMode::Swarm, Grid::new(20), &config(), 1);
        state.pursuers[0] = Pursuer::new(Position::new(15, 15), 1);
        state
            .items
            .push(Item::new(state.player.position, ItemKind::Freeze));

        let report = GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(state.items.len(), 0);
        assert_eq!(state.effect, Some(ActiveEffect::new(EffectKind::Freeze)));
        assert!(report.events.iter().any(|e| matches!(e, TickEvent::ItemCollected { .. })));
        let frozen_at = state.pursuers[0].position;
        assert_eq!(frozen_at, Position::new(14, 14));

        for _ in 0..30 {
            GameEngine::new(&mut state).step(TickInput::none());
            assert_eq!(state.pursuers[0].position, frozen_at);
        }
        assert_eq!(state.effect, None);

        GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(state.pursuers[0].position, Position::new(13, 13));
    }

    #[test]
    fn new_pickup_replaces_running_effect() {
        let mut state = GameState::init(GameMode::Swarm, Grid::new(20), &config(), 1);
        state.pursuers[0].move_frequency = u32::MAX;
        state.effect = Some(ActiveEffect {
            kind: EffectKind::Freeze,
            remaining_ticks: 3,
        });
        state
            .items
            .push(Item::new(state.player.position, ItemKind::SpeedBoost));

        GameEngine::new(&mut state).step(TickInput::none());
        assert_eq!(state.effect, Some(ActiveEffect::new(EffectKind::SpeedBoost)));
    }

    #[test]
    fn swarm_spawns_pursuers_at_farthest_corner_up_to_cap() {
        let mut state = GameState::init(GameMode::Swarm, Grid::new(20), &config(), 4);
        // Park the initial pursuer far away and out of play.
        state.pursuers[0].move_frequency = u32::MAX;
        state.player.position = Position::new(2, 3);

        let mut spawned = Vec::new();
        for _ in 0..(15 * 10 * 6) {
            let report = GameEngine::new(&mut state).step(TickInput::none());
            assert_eq!(report.outcome, TickOutcome::Continue, "tick {}", state.elapsed_ticks);
            for event in report.events {
                if let TickEvent::PursuerSpawned { position, move_frequency } = event {
                    spawned.push((state.time_survived, position, move_frequency));
                }
            }
            // Keep the spawned pursuers from reaching the player.
            for pursuer in state.pursuers.iter_mut().skip(1) {
                pursuer.move_counter = 0;
            }
            assert!(state.pursuers.len() <= GameConfig::MAX_PURSUERS);
        }

        assert_eq!(state.pursuers.len(), GameConfig::MAX_PURSUERS);
        assert_eq!(
            spawned,
            [
                (15, Position::new(19, 19), 4),
                (30, Position::new(19, 19), 3),
                (45, Position::new(19, 19), 2),
                (60, Position::new(19, 19), 2),
            ]
        );
    }

    #[test]
    fn swarm_items_spawn_every_eight_seconds_up_to_cap() {
        /// Puts every item on the top-left tile, away from the player.
        struct CornerRng;

        impl RngOracle for CornerRng {
            fn next_u32(&self, _seed: u64) -> u32 {
                0
            }
        }

        let mut state = GameState::init(GameMode::Swarm, Grid::new(20), &config(), 4);
        state.pursuers[0].move_frequency = u32::MAX;
        let mut spawned = Vec::new();
        for _ in 0..(8 * 10 * 4) {
            let report = GameEngine::with_rng(&mut state, &CornerRng).step(TickInput::none());
            for event in report.events {
                if let TickEvent::ItemSpawned { item } = event {
                    spawned.push((state.time_survived, item.position));
                }
            }
            assert!(state.items.len() <= GameConfig::MAX_ITEMS);
            for pursuer in state.pursuers.iter_mut().skip(1) {
                pursuer.move_counter = 0;
            }
        }

        // Seconds 24 and 32 find both slots taken.
        assert_eq!(
            spawned,
            [(8, Position::new(0, 0)), (16, Position::new(0, 0))]
        );
        assert_eq!(state.items.len(), GameConfig::MAX_ITEMS);
        assert_eq!(state.effect, None);
    }

    #[test]
    fn random_play_stays_in_bounds() {
        for mode in [GameMode::Chase, GameMode::Swarm, GameMode::Snake] {
            let mut state = GameState::init(mode, Grid::new(8), &config(), 11);
            let directions = CardinalDirection::ALL;
            for tick in 0..300usize {
                let input = TickInput::direction(directions[(tick * 7 / 3) % 4]);
                GameEngine::new(&mut state).step(input);
                assert!(all_in_bounds(&state), "{mode} left the grid");
                if state.is_over() {
                    break;
                }
            }
        }
    }

    #[test]
    fn pure_advance_leaves_input_untouched() {
        let state = GameState::init(GameMode::Chase, Grid::new(20), &config(), 1);
        let (next, report) = advance(&state, TickInput::direction(CardinalDirection::Right));
        assert!(report.advanced);
        assert_eq!(state.player.position, Position::new(5, 5));
        assert_eq!(next.player.position, Position::new(6, 5));
        assert_eq!(next.elapsed_ticks, 1);
    }
}
