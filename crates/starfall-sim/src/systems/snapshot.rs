//! Snapshot builder: a read-only projection of the world into the plain
//! serializable view the host renders from.

use hecs::World;

use starfall_core::components::{AlienShip, Health, PlayerShip, Projectile};
use starfall_core::constants::{BULLET_SIZE, PLAYER_SIZE};
use starfall_core::enums::{GameMode, GamePhase};
use starfall_core::events::GameEvent;
use starfall_core::state::{AlienView, BulletView, GameSnapshot, PlayerView};
use starfall_core::types::{Position, SimTime};

/// Build the per-tick snapshot. Entity lists are sorted by spawn order so
/// equal worlds always serialize identically.
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    score: u32,
    level: u32,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let mut players: Vec<PlayerView> = world
        .query::<(&PlayerShip, &Position, &Health)>()
        .iter()
        .map(|(_, (ship, pos, health))| PlayerView {
            slot: ship.slot,
            x: pos.x,
            y: pos.y,
            width: PLAYER_SIZE.width,
            height: PLAYER_SIZE.height,
            health: health.current,
            max_health: health.max,
            color: ship.color.clone(),
            name: ship.name.clone(),
        })
        .collect();
    players.sort_by_key(|p| p.slot.index());

    let mut bullets: Vec<(u64, BulletView)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (proj, pos))| {
            (
                proj.seq,
                BulletView {
                    x: pos.x,
                    y: pos.y,
                    width: BULLET_SIZE.width,
                    height: BULLET_SIZE.height,
                    fired_by_player: proj.fired_by_player,
                    owner: proj.owner,
                },
            )
        })
        .collect();
    bullets.sort_by_key(|&(seq, _)| seq);

    let mut aliens: Vec<(u64, AlienView)> = world
        .query::<(&AlienShip, &Position, &Health)>()
        .iter()
        .map(|(_, (alien, pos, health))| {
            let size = alien.class.size();
            (
                alien.seq,
                AlienView {
                    x: pos.x,
                    y: pos.y,
                    width: size.width,
                    height: size.height,
                    class: alien.class,
                    health: health.current,
                    max_health: health.max,
                },
            )
        })
        .collect();
    aliens.sort_by_key(|&(seq, _)| seq);

    GameSnapshot {
        time,
        phase,
        mode,
        players,
        bullets: bullets.into_iter().map(|(_, view)| view).collect(),
        aliens: aliens.into_iter().map(|(_, view)| view).collect(),
        score,
        level,
        events,
    }
}
