//! Game state snapshot — the complete visible state handed to the renderer
//! each tick. The renderer must treat it as read-only.

use serde::{Deserialize, Serialize};

use crate::enums::{AlienClass, GameMode, GamePhase, PlayerSlot};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    /// Players sorted by slot.
    pub players: Vec<PlayerView>,
    /// Bullets sorted oldest first.
    pub bullets: Vec<BulletView>,
    /// Aliens sorted oldest first.
    pub aliens: Vec<AlienView>,
    pub score: u32,
    pub level: u32,
    /// Events that occurred during this tick.
    pub events: Vec<GameEvent>,
}

/// A player ship as visible to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub slot: PlayerSlot,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clamped at zero; a player at zero is down.
    pub health: i32,
    pub max_health: i32,
    pub color: String,
    pub name: String,
}

/// A bullet as visible to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fired_by_player: bool,
    pub owner: Option<PlayerSlot>,
}

/// An alien ship as visible to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlienView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class: AlienClass,
    pub health: i32,
    pub max_health: i32,
}
