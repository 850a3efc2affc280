// src/game/presets.rs

use crate::game::mode::GameMode;
use crate::types::{Difficulty, GameModeKind};

/// (period, low xp, high xp) for a mode at a given difficulty.
///
/// Harder presets lower the base award and make the full award harder to
/// reach: a longer lead time for `Decreasing`, a shorter ramp for
/// `Increasing`, more priority levels for `Priority`.
pub fn preset_params(kind: GameModeKind, difficulty: Difficulty) -> (u32, u32, u32) {
    use Difficulty::*;
    use GameModeKind::*;

    match (kind, difficulty) {
        (Flat, Easy) => (3, 40, 80),
        (Flat, Medium) => (3, 30, 60),
        (Flat, Hard) => (3, 20, 50),
        (Flat, Extreme) => (3, 10, 40),

        (Decreasing, Easy) => (1, 40, 80),
        (Decreasing, Medium) => (3, 30, 60),
        (Decreasing, Hard) => (5, 20, 60),
        (Decreasing, Extreme) => (7, 10, 60),

        (Increasing, Easy) => (7, 40, 80),
        (Increasing, Medium) => (3, 30, 60),
        (Increasing, Hard) => (2, 20, 60),
        (Increasing, Extreme) => (1, 10, 60),

        (Priority, Easy) => (3, 40, 80),
        (Priority, Medium) => (5, 30, 60),
        (Priority, Hard) => (7, 20, 60),
        (Priority, Extreme) => (10, 10, 60),
    }
}

pub fn preset(kind: GameModeKind, difficulty: Difficulty) -> GameMode {
    let (period, low, high) = preset_params(kind, difficulty);
    GameMode::from_params(kind, period, low, high)
}
