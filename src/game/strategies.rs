// src/game/strategies.rs

//! The four scoring strategies.
//!
//! Each constructor clamps its arguments instead of failing: periods have a
//! floor (1 day, or 2 priority levels), and the high bound is raised to the
//! low bound when given below it. The `appraise` methods assume the caller
//! already validated the transition and short-circuited anything that does
//! not end in `Completed`.

use chrono::{DateTime, Utc};

use crate::task::Task;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// How early `completed` is relative to `due`, as a fraction of a window of
/// `days`: 1 when at least a full window early, 0 at or after the due date.
pub fn early_fraction(days: u32, completed: DateTime<Utc>, due: DateTime<Utc>) -> f64 {
    let early_by = (due - completed).num_milliseconds() as f64;
    let window = f64::from(days) * MILLIS_PER_DAY;

    if early_by <= 0.0 {
        return 0.0;
    }
    if early_by >= window {
        return 1.0;
    }
    early_by / window
}

fn lerp(low: u32, high: u32, fraction: f64) -> u32 {
    let xp = f64::from(low) + f64::from(high - low) * fraction;
    xp as u32
}

/// Same XP for every completion, with a lower award for overdue tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatMode {
    /// Unused by the formula; kept so switching modes can carry it over.
    period: u32,
    overdue_xp: u32,
    completed_xp: u32,
}

impl FlatMode {
    pub fn new(overdue_xp: u32, completed_xp: u32) -> Self {
        Self::with_period(1, overdue_xp, completed_xp)
    }

    pub fn with_period(period: u32, overdue_xp: u32, completed_xp: u32) -> Self {
        Self {
            period: period.max(1),
            overdue_xp,
            completed_xp: completed_xp.max(overdue_xp),
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn overdue_xp(&self) -> u32 {
        self.overdue_xp
    }

    pub fn completed_xp(&self) -> u32 {
        self.completed_xp
    }

    pub(crate) fn appraise(&self, from: &Task, _to: &Task, _now: DateTime<Utc>) -> u32 {
        if from.is_in_progress() {
            self.completed_xp
        } else {
            self.overdue_xp
        }
    }

    pub fn description(&self) -> String {
        format!(
            "Completing a task earns {} xp, or {} xp if it was already overdue.",
            self.completed_xp, self.overdue_xp
        )
    }
}

/// Full XP for finishing early, fading to the overdue award as the due date
/// approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecreasingMode {
    days_before: u32,
    overdue_xp: u32,
    completed_xp: u32,
}

impl DecreasingMode {
    pub fn new(days_before: u32, overdue_xp: u32, completed_xp: u32) -> Self {
        Self {
            days_before: days_before.max(1),
            overdue_xp,
            completed_xp: completed_xp.max(overdue_xp),
        }
    }

    pub fn days_before(&self) -> u32 {
        self.days_before
    }

    pub fn overdue_xp(&self) -> u32 {
        self.overdue_xp
    }

    pub fn completed_xp(&self) -> u32 {
        self.completed_xp
    }

    pub(crate) fn appraise(&self, from: &Task, to: &Task, now: DateTime<Utc>) -> u32 {
        if from.is_overdue_status() {
            return self.overdue_xp;
        }
        let fraction = early_fraction(self.days_before, now, to.due_date().instant());
        lerp(self.overdue_xp, self.completed_xp, fraction)
    }

    pub fn description(&self) -> String {
        format!(
            "Completing a task at least {} days before it is due earns {} xp, \
             falling gradually to {} xp for a task completed just on time.",
            self.days_before, self.completed_xp, self.overdue_xp
        )
    }
}

/// Base XP that ramps up as the due date gets closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncreasingMode {
    days_before: u32,
    initial_xp: u32,
    boosted_xp: u32,
}

impl IncreasingMode {
    pub fn new(days_before: u32, initial_xp: u32, boosted_xp: u32) -> Self {
        Self {
            days_before: days_before.max(1),
            initial_xp,
            boosted_xp: boosted_xp.max(initial_xp),
        }
    }

    pub fn days_before(&self) -> u32 {
        self.days_before
    }

    pub fn initial_xp(&self) -> u32 {
        self.initial_xp
    }

    pub fn boosted_xp(&self) -> u32 {
        self.boosted_xp
    }

    pub(crate) fn appraise(&self, from: &Task, to: &Task, now: DateTime<Utc>) -> u32 {
        // Overdue completions lose the boost.
        if from.is_overdue_status() {
            return self.initial_xp;
        }
        let fraction = 1.0 - early_fraction(self.days_before, now, to.due_date().instant());
        lerp(self.initial_xp, self.boosted_xp, fraction)
    }

    pub fn description(&self) -> String {
        format!(
            "Completing a task earns a base of {} xp, rising gradually to {} xp \
             over the last {} days before it is due.",
            self.initial_xp, self.boosted_xp, self.days_before
        )
    }
}

/// XP scaled by task priority: priority 1 earns the high bound, priority
/// `levels` and beyond earn the low bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityMode {
    levels: u32,
    low_xp: u32,
    high_xp: u32,
}

impl PriorityMode {
    pub fn new(levels: u32, low_xp: u32, high_xp: u32) -> Self {
        Self {
            levels: levels.max(2),
            low_xp,
            high_xp: high_xp.max(low_xp),
        }
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn low_xp(&self) -> u32 {
        self.low_xp
    }

    pub fn high_xp(&self) -> u32 {
        self.high_xp
    }

    pub(crate) fn appraise(&self, from: &Task, to: &Task, _now: DateTime<Utc>) -> u32 {
        if from.is_overdue_status() {
            return self.low_xp;
        }
        let rank = to.priority().value().min(self.levels);
        let fraction = f64::from(self.levels - rank) / f64::from(self.levels - 1);
        lerp(self.low_xp, self.high_xp, fraction)
    }

    pub fn description(&self) -> String {
        format!(
            "Completing a priority 1 task earns {} xp, falling evenly to {} xp \
             for tasks of priority {} or lower.",
            self.high_xp, self.low_xp, self.levels
        )
    }
}
