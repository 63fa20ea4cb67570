//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::{GameMode, PlayerSlot};

/// All possible player intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Choose a mode from the mode-select screen and start the match.
    SelectMode { mode: GameMode },
    /// Fire a bullet from the given slot's ship. Rate-limited per slot;
    /// ignored unless the match is in the `Playing` phase.
    Fire { slot: PlayerSlot },
    /// Toggle between `Playing` and `Paused`.
    TogglePause,
    /// Restart the match with the previously chosen mode. Only valid
    /// from `GameOver`.
    Restart,
    /// Abandon the match and return to mode selection.
    BackToMenu,
}
