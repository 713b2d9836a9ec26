//! Random placement of food and power-up items.

use crate::config::GameConfig;
use crate::env::{RngOracle, SeedContext, compute_seed};
use crate::state::{GameState, Item, ItemKind, Position};

/// Picks a tile not covered by the snake.
///
/// Samples up to [`GameConfig::MAX_SPAWN_ATTEMPTS`] random tiles, then falls
/// back to the first free tile in row-major order so a nearly full grid still
/// terminates. Returns `None` only when every tile is covered.
pub(crate) fn free_tile(state: &GameState, rng: &dyn RngOracle) -> Option<Position> {
    for attempt in 0..GameConfig::MAX_SPAWN_ATTEMPTS {
        let candidate = random_tile(state, rng, SeedContext::FoodX, SeedContext::FoodY, attempt);
        if !state.snake.contains(candidate) {
            return Some(candidate);
        }
    }

    state.grid.tiles().find(|&tile| !state.snake.contains(tile))
}

/// A power-up of uniformly random kind on a uniformly random tile.
///
/// Pursuers and the player are not checked; an item may appear under either.
pub(crate) fn random_item(state: &GameState, rng: &dyn RngOracle) -> Item {
    let position = random_tile(state, rng, SeedContext::ItemX, SeedContext::ItemY, 0);
    let seed = compute_seed(state.game_seed, state.elapsed_ticks, SeedContext::ItemKind, 0);
    let kind = if rng.coin(seed) {
        ItemKind::SpeedBoost
    } else {
        ItemKind::Freeze
    };
    Item::new(position, kind)
}

fn random_tile(
    state: &GameState,
    rng: &dyn RngOracle,
    x_context: SeedContext,
    y_context: SeedContext,
    attempt: u32,
) -> Position {
    let max = state.grid.max_coord() as u32;
    let seed_x = compute_seed(state.game_seed, state.elapsed_ticks, x_context, attempt);
    let seed_y = compute_seed(state.game_seed, state.elapsed_ticks, y_context, attempt);
    Position::new(rng.range(seed_x, 0, max) as i32, rng.range(seed_y, 0, max) as i32)
}
