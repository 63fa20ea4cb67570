//! Input mapper — held-key state and per-slot fire rate limiting.
//!
//! Session-scoped state owned by the engine and constructed fresh per match
//! host, never global. The host feeds raw key-down/key-up events; the
//! movement pass reads the held set against each slot's control scheme.

use std::collections::HashSet;

use starfall_core::constants::FIRE_COOLDOWN_MS;
use starfall_core::enums::{Key, PlayerSlot};

/// Tracks which keys are currently held and when each slot last fired.
#[derive(Debug, Default)]
pub struct InputMapper {
    held: HashSet<Key>,
    /// Timestamp (sim milliseconds) of each slot's last successful shot.
    last_shot_ms: [Option<u64>; 2],
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    /// Record a key release.
    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Forget fire cooldowns. Called when a match (re)starts, so the sim
    /// clock resetting to zero cannot leave a stale cooldown in place.
    pub fn reset_cooldowns(&mut self) {
        self.last_shot_ms = [None, None];
    }

    /// Attempt to fire for a slot at the given sim time. Succeeds iff the
    /// slot has never fired or at least the cooldown interval has elapsed;
    /// records the shot time on success.
    pub fn try_fire(&mut self, slot: PlayerSlot, now_ms: u64) -> bool {
        let entry = &mut self.last_shot_ms[slot.index()];
        match *entry {
            Some(last) if now_ms.saturating_sub(last) < FIRE_COOLDOWN_MS => false,
            _ => {
                *entry = Some(now_ms);
                true
            }
        }
    }

    /// Movement direction for a slot from the held-key set, as unit steps
    /// per axis. Opposing keys held together cancel out. Slot one uses
    /// WASD, slot two the arrow keys.
    pub fn movement(&self, slot: PlayerSlot) -> (f64, f64) {
        let (up, down, left, right) = match slot {
            PlayerSlot::One => (Key::W, Key::S, Key::A, Key::D),
            PlayerSlot::Two => (Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight),
        };

        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.is_held(left) {
            dx -= 1.0;
        }
        if self.is_held(right) {
            dx += 1.0;
        }
        if self.is_held(up) {
            dy -= 1.0;
        }
        if self.is_held(down) {
            dy += 1.0;
        }
        (dx, dy)
    }
}
