// src/achievement/record.rs

use chrono::{DateTime, Utc};
use tracing::info;

use crate::achievement::level::Level;
use crate::achievement::window::WindowCounter;
use crate::types::{DisplayOption, Period};

/// Cumulative and windowed achievement state.
///
/// The level is never stored; it is always derived from the cumulative XP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementRecord {
    xp: u32,
    tasks_completed: u32,
    day: WindowCounter,
    week: WindowCounter,
    display_option: DisplayOption,
}

impl AchievementRecord {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            xp: 0,
            tasks_completed: 0,
            day: WindowCounter::new(Period::Day, now),
            week: WindowCounter::new(Period::Week, now),
            display_option: DisplayOption::default(),
        }
    }

    /// Credit one completed task worth `xp` to the all-time, day and week
    /// counters alike.
    pub fn record_xp(&mut self, xp: u32, now: DateTime<Utc>) {
        let before = self.level();

        self.xp = self.xp.saturating_add(xp);
        self.tasks_completed = self.tasks_completed.saturating_add(1);
        self.day.record(xp, now);
        self.week.record(xp, now);

        let after = self.level();
        if after != before {
            info!(from = %before, to = %after, xp = self.xp, "level up");
        }
    }

    pub fn cumulative_xp(&self) -> u32 {
        self.xp
    }

    pub fn tasks_completed(&self) -> u32 {
        self.tasks_completed
    }

    pub fn level(&self) -> Level {
        Level::from_xp(self.xp)
    }

    pub fn level_max_xp(&self) -> u32 {
        self.level().max_xp()
    }

    pub fn windowed_xp(&mut self, period: Period, now: DateTime<Utc>) -> u32 {
        self.window_mut(period).xp(now)
    }

    pub fn windowed_completed_count(&mut self, period: Period, now: DateTime<Utc>) -> u32 {
        self.window_mut(period).tasks_completed(now)
    }

    pub fn next_boundary(&self, period: Period) -> DateTime<Utc> {
        match period {
            Period::Day => self.day.next_boundary(),
            Period::Week => self.week.next_boundary(),
        }
    }

    pub fn display_option(&self) -> DisplayOption {
        self.display_option
    }

    pub fn set_display_option(&mut self, option: DisplayOption) {
        self.display_option = option;
    }

    fn window_mut(&mut self, period: Period) -> &mut WindowCounter {
        match period {
            Period::Day => &mut self.day,
            Period::Week => &mut self.week,
        }
    }
}
