//! Player movement, pursuit and capture for the chase modes.

use crate::state::GameState;

use super::GameOverReason;

/// Moves the player, then every pursuer, then checks for capture.
pub(super) fn advance(state: &mut GameState) -> Option<GameOverReason> {
    move_player(state);

    if !state.is_frozen() {
        let target = state.player.position;
        for pursuer in state.pursuers.iter_mut() {
            pursuer.tick(target);
        }
    }

    let player = state.player.position;
    state
        .pursuers
        .iter()
        .any(|pursuer| pursuer.position == player)
        .then_some(GameOverReason::Captured)
}

fn move_player(state: &mut GameState) {
    if let Some(direction) = state.player.direction {
        let next = state.player.position.offset(direction);
        state.player.position = state.grid.clamp(next);
    }
}
