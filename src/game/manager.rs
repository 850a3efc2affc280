// src/game/manager.rs

use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::Result;
use crate::game::mode::GameMode;
use crate::game::presets::preset;
use crate::task::Task;
use crate::types::{Difficulty, GameModeKind};

/// Holds the active [`GameMode`] and forwards XP appraisals to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameManager {
    mode: GameMode,
}

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: GameMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    /// Switch to another kind of mode, keeping the current period and XP
    /// bounds (subject to the new mode's clamps).
    pub fn set_mode(&mut self, kind: GameModeKind) {
        let next = GameMode::from_params(
            kind,
            self.mode.period(),
            self.mode.low_xp(),
            self.mode.high_xp(),
        );
        info!(
            from = self.mode.name(),
            to = next.name(),
            period = next.period(),
            low_xp = next.low_xp(),
            high_xp = next.high_xp(),
            "game mode changed"
        );
        self.mode = next;
    }

    /// Switch to a mode using the fixed preset for `difficulty`.
    pub fn set_mode_with_difficulty(&mut self, kind: GameModeKind, difficulty: Difficulty) {
        let next = preset(kind, difficulty);
        info!(
            from = self.mode.name(),
            to = next.name(),
            %difficulty,
            "game mode changed using difficulty preset"
        );
        self.mode = next;
    }

    /// Like [`set_mode`](Self::set_mode), but takes a user-typed name.
    pub fn set_mode_by_name(&mut self, mode: &str) -> Result<()> {
        let kind: GameModeKind = mode.parse()?;
        self.set_mode(kind);
        Ok(())
    }

    /// Like [`set_mode_with_difficulty`](Self::set_mode_with_difficulty), but
    /// takes user-typed names. Nothing changes if either name is invalid.
    pub fn set_mode_by_names(&mut self, mode: &str, difficulty: &str) -> Result<()> {
        let kind: GameModeKind = mode.parse()?;
        let difficulty: Difficulty = difficulty.parse()?;
        self.set_mode_with_difficulty(kind, difficulty);
        Ok(())
    }

    pub fn appraise_xp_change(&self, from: &Task, to: &Task, now: DateTime<Utc>) -> Result<u32> {
        self.mode.appraise_xp_change(from, to, now)
    }
}
