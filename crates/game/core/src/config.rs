/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Viewport units covered by one tile edge. The grid side is
    /// `viewport_width / tile_size`.
    pub tile_size: u32,
    /// Tick period at run start, in milliseconds.
    pub tick_period_ms: u64,
    /// Ticks between moves of the initial pursuer.
    pub pursuer_move_frequency: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of simultaneous pursuers (swarm mode).
    pub const MAX_PURSUERS: usize = 5;
    /// Maximum number of concurrent power-up items (swarm mode).
    pub const MAX_ITEMS: usize = 2;

    // ===== grid =====
    pub const MIN_TILE_COUNT: u32 = 5;
    pub const MAX_TILE_COUNT: u32 = 64;

    // ===== timing =====
    /// Ticks per visible second at the default period.
    pub const TICKS_PER_SECOND: u64 = 10;
    /// Floor for the snake speed ramp.
    pub const MIN_TICK_PERIOD_MS: u64 = 50;
    /// Amount the snake tick period shrinks per food eaten.
    pub const SPEED_STEP_MS: u64 = 2;

    // ===== snake =====
    pub const SNAKE_INITIAL_LENGTH: usize = 3;
    pub const FOOD_REWARD: u64 = 10;

    // ===== swarm =====
    pub const PURSUER_SPAWN_INTERVAL_SECS: u64 = 15;
    pub const ITEM_SPAWN_INTERVAL_SECS: u64 = 8;
    /// Move frequency of a pursuer spawned at 0 seconds; decreases by one
    /// every spawn interval.
    pub const SPAWNED_PURSUER_BASE_FREQUENCY: u32 = 5;
    pub const MIN_MOVE_FREQUENCY: u32 = 2;
    pub const SPEED_BOOST_TICKS: u32 = 50;
    pub const FREEZE_TICKS: u32 = 30;

    // ===== spawning =====
    /// Random draws before the free-tile search falls back to a scan.
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TILE_SIZE: u32 = 20;
    pub const DEFAULT_TICK_PERIOD_MS: u64 = 100;
    pub const DEFAULT_PURSUER_MOVE_FREQUENCY: u32 = 3;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            tick_period_ms: Self::DEFAULT_TICK_PERIOD_MS,
            pursuer_move_frequency: Self::DEFAULT_PURSUER_MOVE_FREQUENCY,
        }
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size.max(1);
        self
    }

    pub fn with_tick_period_ms(mut self, tick_period_ms: u64) -> Self {
        self.tick_period_ms = tick_period_ms.max(Self::MIN_TICK_PERIOD_MS);
        self
    }

    pub fn with_pursuer_move_frequency(mut self, frequency: u32) -> Self {
        self.pursuer_move_frequency = frequency.max(1);
        self
    }

    /// Move frequency for a swarm pursuer spawned after `time_survived` seconds.
    pub fn spawned_move_frequency(time_survived: u64) -> u32 {
        let steps = time_survived / Self::PURSUER_SPAWN_INTERVAL_SECS;
        let base = u64::from(Self::SPAWNED_PURSUER_BASE_FREQUENCY);
        base.saturating_sub(steps)
            .max(u64::from(Self::MIN_MOVE_FREQUENCY)) as u32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
