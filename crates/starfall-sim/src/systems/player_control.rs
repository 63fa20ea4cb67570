//! Player movement from held keys, clamped to the field.

use hecs::World;

use starfall_core::components::{Health, PlayerShip};
use starfall_core::constants::{FIELD_HEIGHT, FIELD_WIDTH, PLAYER_SIZE};
use starfall_core::types::Position;

use crate::input::InputMapper;

/// Move each living ship by its held direction scaled by ship speed. Ships
/// cannot leave the field; downed ships do not move.
pub fn run(world: &mut World, input: &InputMapper) {
    for (_, (ship, pos, health)) in world.query_mut::<(&PlayerShip, &mut Position, &Health)>() {
        if health.current == 0 {
            continue;
        }
        let (dx, dy) = input.movement(ship.slot);
        pos.x = (pos.x + dx * ship.speed).clamp(0.0, FIELD_WIDTH - PLAYER_SIZE.width);
        pos.y = (pos.y + dy * ship.speed).clamp(0.0, FIELD_HEIGHT - PLAYER_SIZE.height);
    }
}
