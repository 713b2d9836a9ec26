//! Application state for screen management and UI context.

use std::collections::HashMap;

use game_core::{GameMode, GameOverReason};
use strum::IntoEnumIterator;

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Mode menu shown before the first run and after returning from a game over.
    StartScreen,
    Playing,
    /// Run finished; the grid stays visible under an overlay.
    GameOver(GameOverSummary),
}

/// What the game-over overlay shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub mode: GameMode,
    pub reason: GameOverReason,
    pub final_score: u64,
    pub high_score: u64,
    pub new_record: bool,
}

/// Mutable application state tracking the current screen and known records.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Highlighted entry of the start-screen menu.
    pub selected: GameMode,
    high_scores: HashMap<GameMode, u64>,
}

impl AppState {
    pub fn new(selected: GameMode) -> Self {
        Self {
            mode: AppMode::StartScreen,
            selected,
            high_scores: HashMap::new(),
        }
    }

    pub fn is_start_screen(&self) -> bool {
        self.mode == AppMode::StartScreen
    }

    pub fn select_next(&mut self) {
        self.selected = self.offset_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.offset_selection(GameMode::iter().count() - 1);
    }

    fn offset_selection(&self, offset: usize) -> GameMode {
        let modes: Vec<_> = GameMode::iter().collect();
        let current = modes
            .iter()
            .position(|mode| *mode == self.selected)
            .unwrap_or_default();
        modes[(current + offset) % modes.len()]
    }

    pub fn enter_playing(&mut self, mode: GameMode) {
        self.selected = mode;
        self.mode = AppMode::Playing;
    }

    /// Switches to the game-over overlay. Ignored unless a run is on screen.
    pub fn finish(
        &mut self,
        mode: GameMode,
        reason: GameOverReason,
        final_score: u64,
        high_score: u64,
    ) {
        if self.mode != AppMode::Playing {
            return;
        }
        let previous = self.high_score(mode);
        self.record_high_score(mode, high_score);
        self.mode = AppMode::GameOver(GameOverSummary {
            mode,
            reason,
            final_score,
            high_score,
            new_record: final_score > previous,
        });
    }

    pub fn back_to_menu(&mut self) {
        self.mode = AppMode::StartScreen;
    }

    pub fn record_high_score(&mut self, mode: GameMode, value: u64) {
        let entry = self.high_scores.entry(mode).or_default();
        *entry = (*entry).max(value);
    }

    pub fn high_score(&self, mode: GameMode) -> u64 {
        self.high_scores.get(&mode).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_menu() {
        let state = AppState::new(GameMode::Snake);
        assert!(state.is_start_screen());
        assert_eq!(state.selected, GameMode::Snake);
    }

    #[test]
    fn selection_wraps_around() {
        let mut state = AppState::new(GameMode::Chase);
        state.select_prev();
        assert_eq!(state.selected, GameMode::Swarm);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, GameMode::Snake);
    }

    #[test]
    fn finish_flags_new_records() {
        let mut state = AppState::new(GameMode::Snake);
        state.record_high_score(GameMode::Snake, 30);
        state.enter_playing(GameMode::Snake);
        state.finish(GameMode::Snake, GameOverReason::HitSelf, 40, 40);

        match &state.mode {
            AppMode::GameOver(summary) => {
                assert!(summary.new_record);
                assert_eq!(summary.final_score, 40);
            }
            other => panic!("unexpected mode {other:?}"),
        }
        assert_eq!(state.high_score(GameMode::Snake), 40);
    }

    #[test]
    fn finish_is_ignored_outside_a_run() {
        let mut state = AppState::new(GameMode::Chase);
        state.finish(GameMode::Chase, GameOverReason::Captured, 3, 3);
        assert!(state.is_start_screen());
    }
}
