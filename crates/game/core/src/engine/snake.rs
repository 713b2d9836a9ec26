//! Snake movement, growth and the speed ramp.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{GameState, Item};

use super::{GameOverReason, TickEvent, spawn};

pub(super) fn advance(
    state: &mut GameState,
    rng: &dyn RngOracle,
    events: &mut Vec<TickEvent>,
) -> Option<GameOverReason> {
    let (Some(head), Some(direction)) = (state.snake.head(), state.player.direction) else {
        return None;
    };

    let next = head.offset(direction);
    if !state.grid.contains(next) {
        return Some(GameOverReason::HitWall);
    }
    // The tail has not moved yet, so stepping onto it counts as a collision.
    if state.snake.contains(next) {
        return Some(GameOverReason::HitSelf);
    }

    state.snake.push_head(next);
    state.player.position = next;

    if state.food.is_some_and(|food| food.position == next) {
        eat(state, rng, events);
    } else {
        state.snake.pop_tail();
    }

    None
}

fn eat(state: &mut GameState, rng: &dyn RngOracle, events: &mut Vec<TickEvent>) {
    state.score += GameConfig::FOOD_REWARD;
    events.push(TickEvent::FoodEaten {
        position: state.player.position,
        score: state.score,
    });

    let period = state
        .tick_period_ms
        .saturating_sub(GameConfig::SPEED_STEP_MS)
        .max(GameConfig::MIN_TICK_PERIOD_MS);
    if period < state.tick_period_ms {
        state.tick_period_ms = period;
        events.push(TickEvent::SpeedIncreased {
            tick_period_ms: period,
        });
    }

    state.food = spawn::free_tile(state, rng).map(Item::food);
}
