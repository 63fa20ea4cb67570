#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::{Position, Rect, SimTime};

    // ---- Geometry ----

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect {
            x,
            y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a), "intersection must be symmetric");
    }

    #[test]
    fn test_intersects_identical() {
        let a = rect(3.0, 4.0, 10.0, 12.0);
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_intersects_contained() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_shared_edge_does_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // b starts exactly where a ends on the x axis.
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));

        // Shared horizontal edge.
        let below = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_shared_corner_does_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_disjoint_does_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(50.0, 50.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_rect_from_parts() {
        let r = Rect::from_parts(Position::new(5.0, 6.0), PLAYER_SIZE);
        assert_eq!(r.x, 5.0);
        assert_eq!(r.y, 6.0);
        assert_eq!(r.width, 40.0);
        assert_eq!(r.height, 40.0);
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_elapsed_ms_matches_fire_cooldown_granularity() {
        let mut time = SimTime::default();
        assert_eq!(time.elapsed_ms(), 0);

        for _ in 0..9 {
            time.advance();
        }
        // 9 ticks at 60Hz = exactly 150ms, the fire cooldown.
        assert_eq!(time.elapsed_ms(), FIRE_COOLDOWN_MS);
    }

    // ---- Alien class table ----

    #[test]
    fn test_alien_class_table() {
        assert_eq!(AlienClass::Small.size().width, 30.0);
        assert_eq!(AlienClass::Small.health(), 10);
        assert_eq!(AlienClass::Small.points(), 10);

        assert_eq!(AlienClass::Medium.size().width, 50.0);
        assert_eq!(AlienClass::Medium.health(), 20);
        assert_eq!(AlienClass::Medium.points(), 25);

        assert_eq!(AlienClass::Large.size().height, 70.0);
        assert_eq!(AlienClass::Large.health(), 30);
        assert_eq!(AlienClass::Large.points(), 50);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::ModeSelect,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_mode_serde() {
        for v in [GameMode::Single, GameMode::Coop] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GameMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_key_serde() {
        let keys = vec![
            Key::W,
            Key::A,
            Key::S,
            Key::D,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::Space,
            Key::Enter,
            Key::P,
            Key::R,
        ];
        for k in keys {
            let json = serde_json::to_string(&k).unwrap();
            let back: Key = serde_json::from_str(&json).unwrap();
            assert_eq!(k, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SelectMode {
                mode: GameMode::Coop,
            },
            PlayerCommand::Fire {
                slot: PlayerSlot::One,
            },
            PlayerCommand::TogglePause,
            PlayerCommand::Restart,
            PlayerCommand::BackToMenu,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired {
                slot: PlayerSlot::Two,
            },
            GameEvent::AlienDestroyed {
                class: AlienClass::Large,
                points: 50,
            },
            GameEvent::PlayerHit {
                slot: PlayerSlot::One,
                damage: 20,
            },
            GameEvent::PlayerDown {
                slot: PlayerSlot::One,
            },
            GameEvent::LevelUp { level: 2 },
            GameEvent::GameOver,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.phase, GamePhase::ModeSelect);
        assert!(back.players.is_empty());
    }

    #[test]
    fn test_player_slot_index() {
        assert_eq!(PlayerSlot::One.index(), 0);
        assert_eq!(PlayerSlot::Two.index(), 1);
    }
}
