//! Game loop thread — runs the engine at the fixed tick rate and publishes
//! snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the host polls the latest
//! snapshot from shared state.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use starfall_core::commands::PlayerCommand;
use starfall_core::constants::TICK_RATE;
use starfall_core::enums::Key;
use starfall_core::state::GameSnapshot;

use crate::engine::{GameEngine, SimConfig};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Messages the host sends into the loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    KeyDown(Key),
    KeyUp(Key),
    Player(PlayerCommand),
    Shutdown,
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    cmd_tx: mpsc::Sender<GameLoopCommand>,
    join: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Sender for feeding commands into the loop.
    pub fn sender(&self) -> mpsc::Sender<GameLoopCommand> {
        self.cmd_tx.clone()
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(self) {
        let _ = self.cmd_tx.send(GameLoopCommand::Shutdown);
        let _ = self.join.join();
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let join = std::thread::Builder::new()
        .name("starfall-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle { cmd_tx, join }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::KeyDown(key)) => engine.key_down(key),
                Ok(GameLoopCommand::KeyUp(key)) => engine.key_up(key),
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles phase semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_core::enums::{GameMode, GamePhase};

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::SelectMode {
            mode: GameMode::Single,
        }))
        .unwrap();
        tx.send(GameLoopCommand::KeyDown(Key::Space)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::SelectMode {
                mode: GameMode::Single
            })
        ));
        assert!(matches!(commands[1], GameLoopCommand::KeyDown(Key::Space)));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let handle = spawn_game_loop(SimConfig::default(), Arc::clone(&latest));

        handle
            .sender()
            .send(GameLoopCommand::Player(PlayerCommand::SelectMode {
                mode: GameMode::Coop,
            }))
            .unwrap();

        // Give the loop a few ticks to publish
        std::thread::sleep(Duration::from_millis(100));
        handle.shutdown();

        let snapshot = latest.lock().unwrap().clone();
        let snapshot = snapshot.unwrap();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.players.len(), 2);
        assert!(snapshot.time.tick > 0);
    }
}
