//! Alien spawning system — one probabilistic spawn roll per tick.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::{ALIEN_SPAWN_RATE, SPAWN_RATE_LEVEL_FACTOR};

/// Per-tick spawn probability at the given level. Scales linearly with the
/// level, so higher levels spawn strictly more often for the same draws.
pub fn spawn_chance(level: u32) -> f64 {
    ALIEN_SPAWN_RATE * (1.0 + f64::from(level) * SPAWN_RATE_LEVEL_FACTOR)
}

/// Roll once; on success append one newly-made alien.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, level: u32, next_seq: &mut u64) {
    if rng.gen::<f64>() < spawn_chance(level) {
        let seq = *next_seq;
        *next_seq += 1;
        let entity = crate::world_setup::spawn_alien(world, rng, seq);
        tracing::debug!(seq, ?entity, "alien spawned");
    }
}
