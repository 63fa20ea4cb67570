//! Simulation systems, run in a fixed order each tick by the engine.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod player_control;
pub mod progression;
pub mod snapshot;
pub mod spawner;
