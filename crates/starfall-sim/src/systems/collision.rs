//! Collision resolution: player bullets against aliens, and aliens ramming
//! player ships.
//!
//! Both scans iterate in ascending spawn order (`seq` for bullets and
//! aliens, slot order for players) so resolution is deterministic regardless
//! of ECS iteration order.

use hecs::{Entity, World};

use starfall_core::components::{AlienShip, Health, PlayerShip, Projectile};
use starfall_core::constants::{ALIEN_COLLISION_DAMAGE, BULLET_SIZE, PLAYER_SIZE};
use starfall_core::enums::PlayerSlot;
use starfall_core::events::GameEvent;
use starfall_core::types::{Position, Rect};

/// Resolve player-fired bullets against aliens. Each bullet hits at most one
/// alien and each alien absorbs at most one bullet per tick; the pairing is
/// first-intersecting in spawn order. Destroyed aliens award their point
/// value once.
pub fn resolve_bullet_hits(
    world: &mut World,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut bullets: Vec<(Entity, u64, Rect, i32)> = world
        .query_mut::<(&Projectile, &Position)>()
        .into_iter()
        .filter(|(_, (proj, _))| proj.fired_by_player)
        .map(|(entity, (proj, pos))| {
            (entity, proj.seq, Rect::from_parts(*pos, BULLET_SIZE), proj.damage)
        })
        .collect();
    bullets.sort_by_key(|&(_, seq, _, _)| seq);

    let mut aliens: Vec<(Entity, u64, Rect)> = world
        .query_mut::<(&AlienShip, &Position)>()
        .into_iter()
        .map(|(entity, (alien, pos))| {
            (entity, alien.seq, Rect::from_parts(*pos, alien.class.size()))
        })
        .collect();
    aliens.sort_by_key(|&(_, seq, _)| seq);

    // One hit per alien per tick.
    let mut resolved = vec![false; aliens.len()];

    for (bullet_entity, _, bullet_rect, damage) in bullets {
        let Some(idx) = aliens
            .iter()
            .enumerate()
            .position(|(i, (_, _, rect))| !resolved[i] && bullet_rect.intersects(rect))
        else {
            continue;
        };
        resolved[idx] = true;
        despawn_buffer.push(bullet_entity);

        let alien_entity = aliens[idx].0;
        let destroyed = match world.get::<&mut Health>(alien_entity) {
            Ok(mut health) => {
                health.current = (health.current - damage).max(0);
                health.current == 0
            }
            Err(_) => continue,
        };

        if destroyed {
            if let Ok(alien) = world.get::<&AlienShip>(alien_entity) {
                *score += alien.points;
                events.push(GameEvent::AlienDestroyed {
                    class: alien.class,
                    points: alien.points,
                });
                tracing::debug!(seq = alien.seq, class = ?alien.class, "alien destroyed");
            }
            despawn_buffer.push(alien_entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Resolve aliens ramming player ships. An alien that overlaps a living
/// player deals fixed contact damage to the first such player (by slot
/// order) and is destroyed without awarding points. Several aliens may hit
/// the same player in one tick.
pub fn resolve_alien_rams(
    world: &mut World,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut players: Vec<(Entity, PlayerSlot, Rect)> = world
        .query_mut::<(&PlayerShip, &Position, &Health)>()
        .into_iter()
        .filter(|(_, (_, _, health))| health.current > 0)
        .map(|(entity, (ship, pos, _))| (entity, ship.slot, Rect::from_parts(*pos, PLAYER_SIZE)))
        .collect();
    players.sort_by_key(|&(_, slot, _)| slot.index());

    let mut aliens: Vec<(Entity, u64, Rect)> = world
        .query_mut::<(&AlienShip, &Position)>()
        .into_iter()
        .map(|(entity, (alien, pos))| {
            (entity, alien.seq, Rect::from_parts(*pos, alien.class.size()))
        })
        .collect();
    aliens.sort_by_key(|&(_, seq, _)| seq);

    for (alien_entity, _, alien_rect) in aliens {
        let Some(idx) = players
            .iter()
            .position(|(_, _, rect)| alien_rect.intersects(rect))
        else {
            continue;
        };
        let (player_entity, slot, _) = players[idx];
        despawn_buffer.push(alien_entity);

        let downed = match world.get::<&mut Health>(player_entity) {
            Ok(mut health) => {
                health.current = (health.current - ALIEN_COLLISION_DAMAGE).max(0);
                health.current == 0
            }
            Err(_) => continue,
        };

        events.push(GameEvent::PlayerHit {
            slot,
            damage: ALIEN_COLLISION_DAMAGE,
        });
        if downed {
            events.push(GameEvent::PlayerDown { slot });
            tracing::info!(?slot, "player down");
            // Downed ships stop taking rams for the rest of the tick.
            players.remove(idx);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
