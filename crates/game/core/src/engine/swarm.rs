//! Timed pursuer and item spawning plus power-up bookkeeping.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{ActiveEffect, GameState, Pursuer};

use super::{TickEvent, spawn};

/// Runs on ticks where `time_survived` reached a new second.
pub(super) fn spawn_on_schedule(
    state: &mut GameState,
    rng: &dyn RngOracle,
    events: &mut Vec<TickEvent>,
) {
    let seconds = state.time_survived;
    if seconds == 0 {
        return;
    }

    if seconds % GameConfig::PURSUER_SPAWN_INTERVAL_SECS == 0 && !state.pursuers.is_full() {
        let position = state.grid.farthest_corner(state.player.position);
        let move_frequency = GameConfig::spawned_move_frequency(seconds);
        state.pursuers.push(Pursuer::new(position, move_frequency));
        events.push(TickEvent::PursuerSpawned {
            position,
            move_frequency,
        });
    }

    if seconds % GameConfig::ITEM_SPAWN_INTERVAL_SECS == 0 && !state.items.is_full() {
        let item = spawn::random_item(state, rng);
        state.items.push(item);
        events.push(TickEvent::ItemSpawned { item });
    }
}

/// Counts the running effect down, then handles a pickup on the player tile.
pub(super) fn resolve_power_ups(state: &mut GameState, events: &mut Vec<TickEvent>) {
    if let Some(effect) = state.effect.as_mut() {
        effect.remaining_ticks = effect.remaining_ticks.saturating_sub(1);
        if effect.remaining_ticks == 0 {
            let kind = effect.kind;
            state.effect = None;
            events.push(TickEvent::EffectExpired { kind });
        }
    }

    let player = state.player.position;
    let Some(index) = state.items.iter().position(|item| item.position == player) else {
        return;
    };
    let item = state.items.remove(index);
    if let Some(kind) = item.kind.effect() {
        state.effect = Some(ActiveEffect::new(kind));
    }
    events.push(TickEvent::ItemCollected { item });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::GameMode;
    use crate::state::{EffectKind, Grid, Item, ItemKind, Position};

    fn swarm() -> GameState {
        GameState::init(GameMode::Swarm, Grid::new(20), &GameConfig::default(), 2)
    }

    #[test]
    fn nothing_spawns_at_second_zero() {
        let mut state = swarm();
        let mut events = Vec::new();
        spawn_on_schedule(&mut state, &crate::env::PcgRng, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.pursuers.len(), 1);
    }

    #[test]
    fn spawn_corner_prefers_top_left_on_ties() {
        let mut state = GameState::init(GameMode::Swarm, Grid::new(21), &GameConfig::default(), 2);
        state.player.position = Position::new(10, 10);
        state.time_survived = 15;
        let mut events = Vec::new();

        spawn_on_schedule(&mut state, &crate::env::PcgRng, &mut events);
        assert_eq!(
            events,
            [TickEvent::PursuerSpawned {
                position: Position::new(0, 0),
                move_frequency: 4
            }]
        );
    }

    #[test]
    fn second_one_twenty_spawns_both() {
        let mut state = swarm();
        state.time_survived = 120;
        let mut events = Vec::new();

        spawn_on_schedule(&mut state, &crate::env::PcgRng, &mut events);
        assert_eq!(state.pursuers.len(), 2);
        assert_eq!(state.items.len(), 1);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn effect_expires_when_countdown_hits_zero() {
        let mut state = swarm();
        state.effect = Some(ActiveEffect {
            kind: EffectKind::SpeedBoost,
            remaining_ticks: 1,
        });
        let mut events = Vec::new();

        resolve_power_ups(&mut state, &mut events);
        assert_eq!(state.effect, None);
        assert_eq!(
            events,
            [TickEvent::EffectExpired {
                kind: EffectKind::SpeedBoost
            }]
        );
    }

    #[test]
    fn pickup_removes_only_the_item_underfoot() {
        let mut state = swarm();
        let underfoot = Item::new(state.player.position, ItemKind::SpeedBoost);
        let elsewhere = Item::new(Position::new(0, 0), ItemKind::Freeze);
        state.items.push(elsewhere);
        state.items.push(underfoot);
        let mut events = Vec::new();

        resolve_power_ups(&mut state, &mut events);
        assert_eq!(state.items.as_slice(), [elsewhere]);
        assert_eq!(state.effect, Some(ActiveEffect::new(EffectKind::SpeedBoost)));
        assert_eq!(events, [TickEvent::ItemCollected { item: underfoot }]);
    }
}
