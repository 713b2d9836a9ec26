//! Utilities for reacting to runtime events inside UI layers.
use game_core::{EffectKind, GameMode, ItemKind, TickEvent};
use runtime::{Event, GameStateEvent, LifecycleEvent};

use crate::config::MessageConfig;
use crate::format::format_time;
use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Turns runtime events into human-readable log lines.
pub struct MessageFeed {
    log: MessageLog,
    config: MessageConfig,
}

impl MessageFeed {
    pub fn new(config: MessageConfig) -> Self {
        Self {
            log: MessageLog::new(config.capacity),
            config,
        }
    }

    fn push(&mut self, text: impl Into<String>, tick: Option<u64>, level: MessageLevel) {
        self.log.push(MessageEntry::new(text, tick, level));
    }

    fn on_tick_event(&mut self, mode: GameMode, tick: u64, event: &TickEvent) {
        let tick = Some(tick);
        match event {
            TickEvent::FoodEaten { score, .. } if self.config.show_pickups => {
                self.push(format!("Food! Score {score}"), tick, MessageLevel::Info);
            }
            TickEvent::SpeedIncreased { tick_period_ms } => {
                self.push(
                    format!("Speed up: {tick_period_ms} ms per step"),
                    tick,
                    MessageLevel::Info,
                );
            }
            TickEvent::PursuerSpawned { position, .. } => {
                self.push(
                    format!("A new pursuer appears at {position}"),
                    tick,
                    MessageLevel::Warning,
                );
            }
            TickEvent::ItemSpawned { item } => {
                self.push(
                    format!("{} spawned at {}", item_name(item.kind), item.position),
                    tick,
                    MessageLevel::Info,
                );
            }
            TickEvent::ItemCollected { item } if self.config.show_pickups => {
                self.push(
                    format!("Picked up {}", item_name(item.kind)),
                    tick,
                    MessageLevel::Highlight,
                );
            }
            TickEvent::EffectExpired { kind } => {
                self.push(
                    format!("{} wore off", effect_name(*kind)),
                    tick,
                    MessageLevel::Info,
                );
            }
            TickEvent::NewHighScore { value } => {
                // Chase records tick up every second; only the first one is news.
                if !self.log.recent(1).any(|e| e.text.starts_with("New high score")) {
                    self.push(
                        format!("New high score: {}", score_text(mode, *value)),
                        tick,
                        MessageLevel::Highlight,
                    );
                }
            }
            TickEvent::FoodEaten { .. } | TickEvent::ItemCollected { .. } => {}
            TickEvent::GameOver { .. } => {}
        }
    }
}

impl EventConsumer for MessageFeed {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::GameState(GameStateEvent::Advanced { snapshot, events }) => {
                for tick_event in events {
                    self.on_tick_event(snapshot.mode, snapshot.elapsed_ticks, tick_event);
                }
                EventImpact::redraw()
            }
            Event::Lifecycle(lifecycle) => {
                match lifecycle {
                    LifecycleEvent::RunStarted {
                        mode, high_score, ..
                    } => {
                        self.log.clear();
                        self.push(
                            format!(
                                "{} started. Best: {}",
                                mode.title(),
                                score_text(*mode, *high_score)
                            ),
                            None,
                            MessageLevel::Info,
                        );
                    }
                    LifecycleEvent::Paused => self.push("Paused", None, MessageLevel::Info),
                    LifecycleEvent::Resumed => self.push("Resumed", None, MessageLevel::Info),
                    LifecycleEvent::GameOver {
                        mode,
                        reason,
                        final_score,
                        ..
                    } => {
                        self.push(
                            format!(
                                "Game over: {} with {}",
                                reason.as_str(),
                                score_text(*mode, *final_score)
                            ),
                            None,
                            MessageLevel::Error,
                        );
                    }
                    LifecycleEvent::HighScoreSaved { .. } => {}
                    LifecycleEvent::HighScoreSaveFailed { error, .. } => {
                        self.push(
                            format!("Could not save high score: {error}"),
                            None,
                            MessageLevel::Warning,
                        );
                    }
                }
                EventImpact::redraw()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

fn score_text(mode: GameMode, value: u64) -> String {
    if mode.is_chase() {
        format_time(value)
    } else {
        format!("{value} points")
    }
}

fn item_name(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Food => "Food",
        ItemKind::SpeedBoost => "Speed boost",
        ItemKind::Freeze => "Freeze",
    }
}

fn effect_name(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::SpeedBoost => "Speed boost",
        EffectKind::Freeze => "Freeze",
    }
}
