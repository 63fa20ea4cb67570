//! Simulation constants and tuning parameters.

use crate::types::Size;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

/// Field width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Field height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

// --- Players ---

/// Player bounding box.
pub const PLAYER_SIZE: Size = Size {
    width: 40.0,
    height: 40.0,
};

/// Player movement speed (pixels per tick, per held directional key).
pub const PLAYER_SPEED: f64 = 5.0;

/// Starting (and maximum) player health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Distance of the player spawn row from the bottom field edge.
pub const PLAYER_BOTTOM_MARGIN: f64 = 20.0;

/// Horizontal spawn offset from field center: slot one spawns to the left,
/// slot two to the right.
pub const PLAYER_SPAWN_OFFSET_X: f64 = 60.0;

/// Slot one display color.
pub const PLAYER_ONE_COLOR: &str = "#00ff41";

/// Slot two display color.
pub const PLAYER_TWO_COLOR: &str = "#ff4081";

/// Slot one display name.
pub const PLAYER_ONE_NAME: &str = "Player 1";

/// Slot two display name.
pub const PLAYER_TWO_NAME: &str = "Player 2";

// --- Bullets ---

/// Bullet bounding box.
pub const BULLET_SIZE: Size = Size {
    width: 4.0,
    height: 12.0,
};

/// Bullet vertical speed magnitude (pixels per tick). Player bullets travel
/// upward (negative y), alien bullets downward.
pub const BULLET_SPEED: f64 = 8.0;

/// Damage dealt by one bullet.
pub const BULLET_DAMAGE: i32 = 10;

/// Maximum live bullets; appending beyond this drops the oldest first.
pub const MAX_BULLETS: usize = 20;

/// Minimum interval between shots for one player slot (milliseconds).
pub const FIRE_COOLDOWN_MS: u64 = 150;

// --- Aliens ---

/// Base downward speed for every alien (pixels per tick).
pub const ALIEN_BASE_SPEED: f64 = 2.0;

/// Per-spawn uniform random speed bonus, drawn from [0, this).
pub const ALIEN_SPEED_JITTER: f64 = 2.0;

/// Base per-tick spawn probability at level 0 scaling.
pub const ALIEN_SPAWN_RATE: f64 = 0.02;

/// Spawn rate grows by this fraction of the base rate per level.
pub const SPAWN_RATE_LEVEL_FACTOR: f64 = 0.1;

/// Damage a player takes when an alien rams them.
pub const ALIEN_COLLISION_DAMAGE: i32 = 20;

/// Small alien bounding box.
pub const ALIEN_SMALL_SIZE: Size = Size {
    width: 30.0,
    height: 30.0,
};

/// Medium alien bounding box.
pub const ALIEN_MEDIUM_SIZE: Size = Size {
    width: 50.0,
    height: 50.0,
};

/// Large alien bounding box.
pub const ALIEN_LARGE_SIZE: Size = Size {
    width: 70.0,
    height: 70.0,
};

/// Small alien starting health.
pub const ALIEN_SMALL_HEALTH: i32 = 10;

/// Medium alien starting health.
pub const ALIEN_MEDIUM_HEALTH: i32 = 20;

/// Large alien starting health.
pub const ALIEN_LARGE_HEALTH: i32 = 30;

/// Points awarded for destroying a small alien.
pub const ALIEN_SMALL_POINTS: u32 = 10;

/// Points awarded for destroying a medium alien.
pub const ALIEN_MEDIUM_POINTS: u32 = 25;

/// Points awarded for destroying a large alien.
pub const ALIEN_LARGE_POINTS: u32 = 50;

// --- Progression ---

/// Level is `score / this + 1`.
pub const LEVEL_SCORE_DIVISOR: u32 = 1000;
