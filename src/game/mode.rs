// src/game/mode.rs

use chrono::{DateTime, Utc};

use crate::errors::{QuestlogError, Result};
use crate::game::strategies::{DecreasingMode, FlatMode, IncreasingMode, PriorityMode};
use crate::task::Task;
use crate::types::GameModeKind;

/// The active scoring strategy.
///
/// The set of modes is closed; everything that needs to distinguish them
/// matches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Flat(FlatMode),
    Decreasing(DecreasingMode),
    Increasing(IncreasingMode),
    Priority(PriorityMode),
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Flat(FlatMode::with_period(3, 30, 60))
    }
}

impl GameMode {
    /// Build a mode of the given kind from a generic (period, low, high)
    /// triple, applying that mode's clamps.
    pub fn from_params(kind: GameModeKind, period: u32, low_xp: u32, high_xp: u32) -> Self {
        match kind {
            GameModeKind::Flat => GameMode::Flat(FlatMode::with_period(period, low_xp, high_xp)),
            GameModeKind::Decreasing => {
                GameMode::Decreasing(DecreasingMode::new(period, low_xp, high_xp))
            }
            GameModeKind::Increasing => {
                GameMode::Increasing(IncreasingMode::new(period, low_xp, high_xp))
            }
            GameModeKind::Priority => {
                GameMode::Priority(PriorityMode::new(period, low_xp, high_xp))
            }
        }
    }

    pub fn kind(&self) -> GameModeKind {
        match self {
            GameMode::Flat(_) => GameModeKind::Flat,
            GameMode::Decreasing(_) => GameModeKind::Decreasing,
            GameMode::Increasing(_) => GameModeKind::Increasing,
            GameMode::Priority(_) => GameModeKind::Priority,
        }
    }

    /// Display name, e.g. `"Decreasing"`.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Flat(_) => "Flat",
            GameMode::Decreasing(_) => "Decreasing",
            GameMode::Increasing(_) => "Increasing",
            GameMode::Priority(_) => "Priority",
        }
    }

    pub fn description(&self) -> String {
        match self {
            GameMode::Flat(m) => m.description(),
            GameMode::Decreasing(m) => m.description(),
            GameMode::Increasing(m) => m.description(),
            GameMode::Priority(m) => m.description(),
        }
    }

    /// Days for the time-based modes, priority levels for `Priority`.
    pub fn period(&self) -> u32 {
        match self {
            GameMode::Flat(m) => m.period(),
            GameMode::Decreasing(m) => m.days_before(),
            GameMode::Increasing(m) => m.days_before(),
            GameMode::Priority(m) => m.levels(),
        }
    }

    pub fn low_xp(&self) -> u32 {
        match self {
            GameMode::Flat(m) => m.overdue_xp(),
            GameMode::Decreasing(m) => m.overdue_xp(),
            GameMode::Increasing(m) => m.initial_xp(),
            GameMode::Priority(m) => m.low_xp(),
        }
    }

    pub fn high_xp(&self) -> u32 {
        match self {
            GameMode::Flat(m) => m.completed_xp(),
            GameMode::Decreasing(m) => m.completed_xp(),
            GameMode::Increasing(m) => m.boosted_xp(),
            GameMode::Priority(m) => m.high_xp(),
        }
    }

    /// XP earned by turning `from` into `to`, with `now` as the completion
    /// instant.
    ///
    /// Both values must be versions of the same task (same id) with
    /// different statuses. Transitions that do not end in `Completed` earn
    /// nothing.
    pub fn appraise_xp_change(&self, from: &Task, to: &Task, now: DateTime<Utc>) -> Result<u32> {
        check_valid_tasks(from, to)?;

        if !to.is_completed() {
            return Ok(0);
        }

        let xp = match self {
            GameMode::Flat(m) => m.appraise(from, to, now),
            GameMode::Decreasing(m) => m.appraise(from, to, now),
            GameMode::Increasing(m) => m.appraise(from, to, now),
            GameMode::Priority(m) => m.appraise(from, to, now),
        };
        Ok(xp)
    }
}

fn check_valid_tasks(from: &Task, to: &Task) -> Result<()> {
    if from.id() != to.id() {
        return Err(QuestlogError::InvalidArgument(format!(
            "cannot appraise '{}' -> '{}': not the same task",
            from.name(),
            to.name()
        )));
    }
    if from.status() == to.status() {
        return Err(QuestlogError::InvalidArgument(format!(
            "cannot appraise '{}': status unchanged ({})",
            from.name(),
            from.status()
        )));
    }
    Ok(())
}
