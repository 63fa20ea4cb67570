//! Win/lose and level progression checks, run after collisions settle.

use hecs::World;

use starfall_core::components::{Health, PlayerShip};
use starfall_core::constants::LEVEL_SCORE_DIVISOR;
use starfall_core::events::GameEvent;

/// Level implied by a score: one level per full score divisor, starting at 1.
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_SCORE_DIVISOR + 1
}

/// Advance the level if the score has crossed a threshold and report whether
/// the match is lost. The match is lost once every player ship is at zero
/// health.
pub fn run(world: &mut World, score: u32, level: &mut u32, events: &mut Vec<GameEvent>) -> bool {
    let new_level = level_for_score(score);
    if new_level > *level {
        *level = new_level;
        events.push(GameEvent::LevelUp { level: new_level });
        tracing::info!(level = new_level, "level up");
    }

    let mut any_player = false;
    let mut any_alive = false;
    for (_, (health, _ship)) in world.query_mut::<(&Health, &PlayerShip)>() {
        any_player = true;
        if health.current > 0 {
            any_alive = true;
        }
    }
    any_player && !any_alive
}
