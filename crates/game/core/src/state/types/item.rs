use crate::config::GameConfig;

use super::Position;

/// What a collectible does when the player (or snake head) reaches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Food,
    SpeedBoost,
    Freeze,
}

impl ItemKind {
    /// The timed effect granted on pickup, if any.
    pub const fn effect(self) -> Option<EffectKind> {
        match self {
            ItemKind::Food => None,
            ItemKind::SpeedBoost => Some(EffectKind::SpeedBoost),
            ItemKind::Freeze => Some(EffectKind::Freeze),
        }
    }
}

/// Transient collectible on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub position: Position,
    pub kind: ItemKind,
}

impl Item {
    pub const fn new(position: Position, kind: ItemKind) -> Self {
        Self { position, kind }
    }

    pub const fn food(position: Position) -> Self {
        Self::new(position, ItemKind::Food)
    }
}

/// Timed power-up effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Visual feedback only; the player's step rate is unchanged.
    SpeedBoost,
    /// Pursuers neither move nor advance their counters.
    Freeze,
}

impl EffectKind {
    pub const fn duration_ticks(self) -> u32 {
        match self {
            EffectKind::SpeedBoost => GameConfig::SPEED_BOOST_TICKS,
            EffectKind::Freeze => GameConfig::FREEZE_TICKS,
        }
    }
}

/// The single effect currently running and its countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub remaining_ticks: u32,
}

impl ActiveEffect {
    pub const fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            remaining_ticks: kind.duration_ticks(),
        }
    }
}
