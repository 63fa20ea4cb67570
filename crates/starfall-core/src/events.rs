//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{AlienClass, PlayerSlot};

/// One-shot events collected during a tick and drained into the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bullet left a player's ship.
    ShotFired { slot: PlayerSlot },
    /// An alien was destroyed by a bullet and its points were scored.
    AlienDestroyed { class: AlienClass, points: u32 },
    /// An alien rammed a player.
    PlayerHit { slot: PlayerSlot, damage: i32 },
    /// A player's health reached zero.
    PlayerDown { slot: PlayerSlot },
    /// The score crossed a level boundary.
    LevelUp { level: u32 },
    /// Every player is down; the match is over.
    GameOver,
}
