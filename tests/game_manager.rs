// tests/game_manager.rs

use questlog::errors::QuestlogError;
use questlog::game::{GameManager, GameMode, preset_params};
use questlog::types::{Difficulty, GameModeKind};

#[test]
fn default_is_flat_thirty_sixty() {
    let manager = GameManager::new();
    let mode = manager.mode();

    assert_eq!(mode.kind(), GameModeKind::Flat);
    assert_eq!(GameModeKind::default(), GameModeKind::Flat);
    assert_eq!(mode.name(), "Flat");
    assert_eq!((mode.period(), mode.low_xp(), mode.high_xp()), (3, 30, 60));
}

#[test]
fn set_mode_carries_parameters_over() {
    let mut manager = GameManager::new();
    manager.set_mode(GameModeKind::Decreasing);

    let mode = manager.mode();
    assert!(matches!(mode, GameMode::Decreasing(_)));
    assert_eq!((mode.period(), mode.low_xp(), mode.high_xp()), (3, 30, 60));

    manager.set_mode(GameModeKind::Flat);
    assert_eq!(manager.mode(), &GameMode::default());
}

#[test]
fn set_mode_applies_the_new_clamps() {
    let mut manager = GameManager::new();
    manager.set_mode_with_difficulty(GameModeKind::Increasing, Difficulty::Extreme);
    assert_eq!(manager.mode().period(), 1);

    // Priority needs at least two levels.
    manager.set_mode(GameModeKind::Priority);
    let mode = manager.mode();
    assert_eq!((mode.period(), mode.low_xp(), mode.high_xp()), (2, 10, 60));
}

#[test]
fn difficulty_presets() {
    assert_eq!(preset_params(GameModeKind::Flat, Difficulty::Easy), (3, 40, 80));
    assert_eq!(preset_params(GameModeKind::Decreasing, Difficulty::Hard), (5, 20, 60));
    assert_eq!(preset_params(GameModeKind::Increasing, Difficulty::Hard), (2, 20, 60));
    assert_eq!(preset_params(GameModeKind::Priority, Difficulty::Extreme), (10, 10, 60));

    let mut manager = GameManager::new();
    manager.set_mode_with_difficulty(GameModeKind::Decreasing, Difficulty::Hard);
    let mode = manager.mode();
    assert_eq!(mode.kind(), GameModeKind::Decreasing);
    assert_eq!((mode.period(), mode.low_xp(), mode.high_xp()), (5, 20, 60));
}

#[test]
fn names_parse_exactly() {
    assert_eq!("priority".parse::<GameModeKind>().unwrap(), GameModeKind::Priority);
    assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    assert!(matches!(
        "Flat".parse::<GameModeKind>(),
        Err(QuestlogError::InvalidArgument(_))
    ));
    assert!("hard ".parse::<Difficulty>().is_err());
}

#[test]
fn invalid_names_leave_the_mode_alone() {
    let mut manager = GameManager::new();

    assert!(manager.set_mode_by_name("chaos").is_err());
    assert!(manager.set_mode_by_names("decreasing", "impossible").is_err());
    assert_eq!(manager.mode(), &GameMode::default());

    manager.set_mode_by_names("increasing", "easy").unwrap();
    assert_eq!(manager.mode().kind(), GameModeKind::Increasing);
    assert_eq!(manager.mode().period(), 7);
}
