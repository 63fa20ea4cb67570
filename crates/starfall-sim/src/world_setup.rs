//! Entity spawn factories for setting up and populating the world.
//!
//! Creates players, bullets, and aliens with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::*;
use starfall_core::constants::*;
use starfall_core::enums::{AlienClass, GameMode, PlayerSlot};
use starfall_core::types::Position;

/// Spawn the ships for a mode: slot one always, slot two in coop.
pub fn spawn_players(world: &mut World, mode: GameMode) {
    spawn_player(world, PlayerSlot::One);
    if mode == GameMode::Coop {
        spawn_player(world, PlayerSlot::Two);
    }
}

/// Spawn one player ship near the bottom of the field: slot one left of
/// center, slot two right of center, both with full health.
pub fn spawn_player(world: &mut World, slot: PlayerSlot) -> hecs::Entity {
    let center_x = FIELD_WIDTH / 2.0 - PLAYER_SIZE.width / 2.0;
    let x = match slot {
        PlayerSlot::One => center_x - PLAYER_SPAWN_OFFSET_X,
        PlayerSlot::Two => center_x + PLAYER_SPAWN_OFFSET_X,
    };
    let y = FIELD_HEIGHT - PLAYER_SIZE.height - PLAYER_BOTTOM_MARGIN;

    let (name, color) = match slot {
        PlayerSlot::One => (PLAYER_ONE_NAME, PLAYER_ONE_COLOR),
        PlayerSlot::Two => (PLAYER_TWO_NAME, PLAYER_TWO_COLOR),
    };

    world.spawn((
        PlayerShip {
            slot,
            name: name.to_string(),
            color: color.to_string(),
            speed: PLAYER_SPEED,
        },
        Position::new(x, y),
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
    ))
}

/// Spawn a bullet horizontally centered on `origin_x`. Player bullets travel
/// upward, alien bullets downward; `owner` is set only for player bullets.
pub fn spawn_bullet(
    world: &mut World,
    origin_x: f64,
    origin_y: f64,
    fired_by_player: bool,
    owner: Option<PlayerSlot>,
    seq: u64,
) -> hecs::Entity {
    let velocity_y = if fired_by_player {
        -BULLET_SPEED
    } else {
        BULLET_SPEED
    };

    world.spawn((
        Projectile {
            seq,
            velocity_y,
            damage: BULLET_DAMAGE,
            fired_by_player,
            owner,
        },
        Position::new(origin_x - BULLET_SIZE.width / 2.0, origin_y),
    ))
}

/// Spawn one alien just above the top edge: class uniform over the three
/// categories, horizontal position uniform over the field, speed = base plus
/// a uniform random bonus.
pub fn spawn_alien(world: &mut World, rng: &mut ChaCha8Rng, seq: u64) -> hecs::Entity {
    let class = match rng.gen_range(0..3) {
        0 => AlienClass::Small,
        1 => AlienClass::Medium,
        _ => AlienClass::Large,
    };
    let size = class.size();

    let x = rng.gen_range(0.0..FIELD_WIDTH - size.width);
    let speed = ALIEN_BASE_SPEED + rng.gen_range(0.0..ALIEN_SPEED_JITTER);

    world.spawn((
        AlienShip {
            seq,
            class,
            speed,
            points: class.points(),
        },
        // Offset by its own height so it enters the field fully.
        Position::new(x, -size.height),
        Health {
            current: class.health(),
            max: class.health(),
        },
    ))
}
