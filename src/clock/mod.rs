// src/clock/mod.rs

//! Wall-clock abstraction.
//!
//! Everything time-dependent (overdue checks, XP interpolation, achievement
//! windows) reads "now" through [`Clock`] so tests can pin or advance time
//! with [`mock::MockClock`].

use std::fmt::Debug;

use chrono::{DateTime, Utc};

pub mod mock;

pub use mock::MockClock;

/// Abstract source of the current instant.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Implementation that reads the system clock.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant; used for `--now`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
