//! The game engine: owns the ECS world and all session state, processes
//! queued commands at tick boundaries, and steps the simulation.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::PlayerCommand;
use starfall_core::components::{Health, PlayerShip, Projectile};
use starfall_core::constants::{MAX_BULLETS, PLAYER_SIZE};
use starfall_core::enums::{GameMode, GamePhase, Key, PlayerSlot};
use starfall_core::events::GameEvent;
use starfall_core::state::GameSnapshot;
use starfall_core::types::{Position, SimTime};

use crate::input::InputMapper;
use crate::systems;
use crate::world_setup;

/// Engine construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed. The same seed and command sequence produce the same match.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

#[derive(Debug, Clone, Copy)]
struct ScoreState {
    score: u32,
    level: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self { score: 0, level: 1 }
    }
}

/// Owns the world and drives it forward one tick at a time.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    /// Reused across ticks to avoid per-tick allocation.
    despawn_buffer: Vec<Entity>,
    /// Events accumulated during the current tick, drained into the snapshot.
    events: Vec<GameEvent>,
    input: InputMapper,
    score: ScoreState,
    next_bullet_seq: u64,
    next_alien_seq: u64,
}

impl GameEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            mode: GameMode::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::with_capacity(64),
            events: Vec::new(),
            input: InputMapper::new(),
            score: ScoreState::default(),
            next_bullet_seq: 0,
            next_alien_seq: 0,
        }
    }

    /// Queue a command for processing at the start of the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Record a key press. Keys bound to commands also enqueue them, so a
    /// press between ticks is never lost.
    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
        match key {
            Key::Space => self.queue_command(PlayerCommand::Fire {
                slot: PlayerSlot::One,
            }),
            Key::Enter => self.queue_command(PlayerCommand::Fire {
                slot: PlayerSlot::Two,
            }),
            Key::P => self.queue_command(PlayerCommand::TogglePause),
            Key::R => self.queue_command(PlayerCommand::Restart),
            _ => {}
        }
    }

    /// Record a key release.
    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Run one tick: drain the command queue, step the simulation if the
    /// match is live, and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            self.mode,
            self.score.score,
            self.score.level,
            events,
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectMode { mode } => {
                if self.phase == GamePhase::ModeSelect {
                    self.start_match(mode);
                }
            }
            PlayerCommand::Fire { slot } => self.handle_fire(slot),
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Playing => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Playing,
                _ => {}
            },
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.start_match(self.mode);
                }
            }
            PlayerCommand::BackToMenu => {
                if self.phase != GamePhase::ModeSelect {
                    self.world.clear();
                    self.score = ScoreState::default();
                    self.time = SimTime::default();
                    self.events.clear();
                    self.phase = GamePhase::ModeSelect;
                    tracing::info!("returned to mode select");
                }
            }
        }
    }

    fn start_match(&mut self, mode: GameMode) {
        self.world.clear();
        world_setup::spawn_players(&mut self.world, mode);
        self.mode = mode;
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.events.clear();
        self.input.reset_cooldowns();
        self.next_bullet_seq = 0;
        self.next_alien_seq = 0;
        self.phase = GamePhase::Playing;
        tracing::info!(?mode, "match started");
    }

    fn handle_fire(&mut self, slot: PlayerSlot) {
        if self.phase != GamePhase::Playing {
            return;
        }

        // The firing ship must exist and be alive.
        let origin = self
            .world
            .query_mut::<(&PlayerShip, &Position, &Health)>()
            .into_iter()
            .find(|(_, (ship, _, health))| ship.slot == slot && health.current > 0)
            .map(|(_, (_, pos, _))| (pos.x + PLAYER_SIZE.width / 2.0, pos.y));
        let Some((origin_x, origin_y)) = origin else {
            return;
        };

        if !self.input.try_fire(slot, self.time.elapsed_ms()) {
            return;
        }

        self.enforce_bullet_cap();

        let seq = self.next_bullet_seq;
        self.next_bullet_seq += 1;
        world_setup::spawn_bullet(&mut self.world, origin_x, origin_y, true, Some(slot), seq);
        self.events.push(GameEvent::ShotFired { slot });
    }

    /// Despawn the oldest live bullets until one slot is free under the cap.
    fn enforce_bullet_cap(&mut self) {
        let mut live: Vec<(Entity, u64)> = self
            .world
            .query_mut::<&Projectile>()
            .into_iter()
            .map(|(entity, proj)| (entity, proj.seq))
            .collect();
        if live.len() < MAX_BULLETS {
            return;
        }
        live.sort_by_key(|&(_, seq)| seq);

        let surplus = live.len() + 1 - MAX_BULLETS;
        for &(entity, _) in &live[..surplus] {
            let _ = self.world.despawn(entity);
        }
    }

    fn run_systems(&mut self) {
        systems::movement::run(&mut self.world);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            self.score.level,
            &mut self.next_alien_seq,
        );
        systems::collision::resolve_bullet_hits(
            &mut self.world,
            &mut self.score.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::collision::resolve_alien_rams(
            &mut self.world,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        let lost = systems::progression::run(
            &mut self.world,
            self.score.score,
            &mut self.score.level,
            &mut self.events,
        );
        systems::player_control::run(&mut self.world, &self.input);

        if lost {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            tracing::info!(score = self.score.score, "game over");
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn score(&self) -> u32 {
        self.score.score
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score.score = score;
    }

    #[cfg(test)]
    pub(crate) fn spawn_test_alien(
        &mut self,
        class: starfall_core::enums::AlienClass,
        x: f64,
        y: f64,
        speed: f64,
    ) -> Entity {
        use starfall_core::components::AlienShip;

        let seq = self.next_alien_seq;
        self.next_alien_seq += 1;
        self.world.spawn((
            AlienShip {
                seq,
                class,
                speed,
                points: class.points(),
            },
            Position::new(x, y),
            Health {
                current: class.health(),
                max: class.health(),
            },
        ))
    }

    #[cfg(test)]
    pub(crate) fn spawn_test_bullets(&mut self, count: usize) {
        for _ in 0..count {
            let seq = self.next_bullet_seq;
            self.next_bullet_seq += 1;
            world_setup::spawn_bullet(
                &mut self.world,
                400.0,
                300.0,
                true,
                Some(PlayerSlot::One),
                seq,
            );
        }
    }
}
