//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces a GameSnapshot for the renderer after every tick.

pub mod engine;
pub mod game_loop;
pub mod input;
pub mod systems;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};
pub use starfall_core as core;
