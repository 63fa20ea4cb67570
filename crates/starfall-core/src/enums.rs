//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Size;

/// Match mode selected before play starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Single,
    Coop,
}

/// Match lifecycle phase (top-level state).
///
/// `ModeSelect -> Playing -> {Paused <-> Playing} -> GameOver -> (restart)`.
/// The simulation step only has effect in `Playing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    ModeSelect,
    Playing,
    Paused,
    GameOver,
}

/// Fixed player identity. Determines controls, spawn position, color,
/// and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Zero-based index for slot-keyed arrays and ordering.
    pub fn index(&self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// Alien size category, determining bounding box, health, and point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlienClass {
    Small,
    Medium,
    Large,
}

impl AlienClass {
    pub fn size(&self) -> Size {
        match self {
            AlienClass::Small => ALIEN_SMALL_SIZE,
            AlienClass::Medium => ALIEN_MEDIUM_SIZE,
            AlienClass::Large => ALIEN_LARGE_SIZE,
        }
    }

    pub fn health(&self) -> i32 {
        match self {
            AlienClass::Small => ALIEN_SMALL_HEALTH,
            AlienClass::Medium => ALIEN_MEDIUM_HEALTH,
            AlienClass::Large => ALIEN_LARGE_HEALTH,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            AlienClass::Small => ALIEN_SMALL_POINTS,
            AlienClass::Medium => ALIEN_MEDIUM_POINTS,
            AlienClass::Large => ALIEN_LARGE_POINTS,
        }
    }
}

/// The raw key vocabulary the input mapper understands. The host is
/// responsible for translating real keyboard events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Slot one up.
    W,
    /// Slot one left.
    A,
    /// Slot one down.
    S,
    /// Slot one right.
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Slot one fire.
    Space,
    /// Slot two fire.
    Enter,
    /// Pause toggle.
    P,
    /// Restart after game over.
    R,
}
