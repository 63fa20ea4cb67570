//! Kinematic stepping for bullets and aliens.
//!
//! Each entity advances vertically by its own per-tick speed. The sign of a
//! bullet's velocity encodes its direction; aliens always drift downward.

use hecs::World;

use starfall_core::components::{AlienShip, Projectile};
use starfall_core::types::Position;

/// Advance every bullet and alien by one tick.
pub fn run(world: &mut World) {
    for (_entity, (pos, proj)) in world.query_mut::<(&mut Position, &Projectile)>() {
        pos.y += proj.velocity_y;
    }

    for (_entity, (pos, alien)) in world.query_mut::<(&mut Position, &AlienShip)>() {
        pos.y += alien.speed;
    }
}
