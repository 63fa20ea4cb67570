//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{AlienClass, PlayerSlot};

/// A player-controlled ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    pub slot: PlayerSlot,
    /// Display name shown by the renderer.
    pub name: String,
    /// Display color (CSS hex) shown by the renderer.
    pub color: String,
    /// Movement speed in pixels per tick, per held directional key.
    pub speed: f64,
}

/// Hit points. A player or alien with `current == 0` is no longer alive;
/// stored health never goes negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// An in-flight bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Monotonic spawn sequence number; orders bullets by age for the live
    /// cap and for first-match collision scans.
    pub seq: u64,
    /// Signed vertical speed in pixels per tick (negative = upward).
    pub velocity_y: f64,
    /// Damage dealt on hit.
    pub damage: i32,
    /// Player-fired bullets collide with aliens; alien-fired bullets are a
    /// reserved extension point and pass through everything.
    pub fired_by_player: bool,
    /// Owning slot; always `Some` when `fired_by_player` is true.
    pub owner: Option<PlayerSlot>,
}

/// A descending alien ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlienShip {
    /// Monotonic spawn sequence number; orders aliens for first-match
    /// collision scans.
    pub seq: u64,
    pub class: AlienClass,
    /// Downward speed in pixels per tick (base + per-spawn random bonus).
    pub speed: f64,
    /// Points awarded when destroyed by a bullet.
    pub points: u32,
}
