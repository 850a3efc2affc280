// src/achievement/window.rs

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::types::Period;

/// First period boundary strictly after `now`: the next UTC midnight for
/// `Day`, the next Monday 00:00 UTC for `Week`.
pub fn next_boundary_after(period: Period, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let days_ahead = match period {
        Period::Day => 1,
        Period::Week => 7 - u64::from(today.weekday().num_days_from_monday()),
    };
    let date = today
        .checked_add_days(Days::new(days_ahead))
        .unwrap_or(NaiveDate::MAX);
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// XP and completion accumulators that reset at a calendar boundary.
///
/// There is no timer: every read or write first checks whether `now` has
/// reached the stored boundary and, if so, zeroes the accumulators and moves
/// the boundary past `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCounter {
    period: Period,
    xp: u32,
    tasks_completed: u32,
    next_boundary: DateTime<Utc>,
}

impl WindowCounter {
    pub fn new(period: Period, now: DateTime<Utc>) -> Self {
        Self {
            period,
            xp: 0,
            tasks_completed: 0,
            next_boundary: next_boundary_after(period, now),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn next_boundary(&self) -> DateTime<Utc> {
        self.next_boundary
    }

    fn roll_over(&mut self, now: DateTime<Utc>) {
        if now < self.next_boundary {
            return;
        }
        let next = next_boundary_after(self.period, now);
        debug!(
            period = ?self.period,
            xp = self.xp,
            tasks_completed = self.tasks_completed,
            next_boundary = %next,
            "achievement window rolled over"
        );
        self.xp = 0;
        self.tasks_completed = 0;
        self.next_boundary = next;
    }

    pub fn record(&mut self, xp: u32, now: DateTime<Utc>) {
        self.roll_over(now);
        self.xp = self.xp.saturating_add(xp);
        self.tasks_completed = self.tasks_completed.saturating_add(1);
    }

    pub fn xp(&mut self, now: DateTime<Utc>) -> u32 {
        self.roll_over(now);
        self.xp
    }

    pub fn tasks_completed(&mut self, now: DateTime<Utc>) -> u32 {
        self.roll_over(now);
        self.tasks_completed
    }
}
