//! Cleanup system: removes entities that left the vertical play field.

use hecs::{Entity, World};

use starfall_core::components::{AlienShip, Projectile};
use starfall_core::constants::{BULLET_SIZE, FIELD_HEIGHT};
use starfall_core::types::Position;

/// Remove bullets once fully past either vertical edge and aliens once fully
/// past the bottom. Aliens are never pruned at the top: they spawn above the
/// field and only move downward. Uses a pre-allocated buffer to avoid
/// per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Bullets survive while y is within (-height, field_height + height).
    for (entity, (pos, _proj)) in world.query_mut::<(&Position, &Projectile)>() {
        if pos.y <= -BULLET_SIZE.height || pos.y >= FIELD_HEIGHT + BULLET_SIZE.height {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, alien)) in world.query_mut::<(&Position, &AlienShip)>() {
        if pos.y >= FIELD_HEIGHT + alien.class.size().height {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
