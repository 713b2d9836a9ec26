//! The three game variants sharing one engine.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Which rule set a run follows.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// Evade a single pursuer; score is survival time.
    #[default]
    #[strum(to_string = "chase", serialize = "escape")]
    Chase,
    /// Grow by eating food; walls and the body are fatal.
    Snake,
    /// Chase with spawning pursuers and timed power-ups.
    Swarm,
}

impl GameMode {
    /// Persistence key for this mode's high score.
    pub const fn high_score_key(self) -> &'static str {
        match self {
            GameMode::Chase => "escapeHighScore",
            GameMode::Snake => "snakeHighScore",
            GameMode::Swarm => "swarmHighScore",
        }
    }

    /// True for the modes scored by survival time.
    pub const fn is_chase(self) -> bool {
        matches!(self, GameMode::Chase | GameMode::Swarm)
    }

    pub const fn title(self) -> &'static str {
        match self {
            GameMode::Chase => "Escape",
            GameMode::Snake => "Snake",
            GameMode::Swarm => "Swarm",
        }
    }
}
