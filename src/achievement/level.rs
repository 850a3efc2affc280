// src/achievement/level.rs

use std::fmt;
use std::str::FromStr;

use crate::errors::QuestlogError;

/// Achievement level derived from cumulative XP.
///
/// Each band includes its lower bound, so XP sitting exactly on a boundary
/// belongs to the higher level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

/// (level, name, min xp, max xp)
static LEVELS: [(Level, &str, u32, u32); 5] = [
    (Level::Level1, "lvl.1", 0, 500),
    (Level::Level2, "lvl.2", 500, 1000),
    (Level::Level3, "lvl.3", 1000, 2000),
    (Level::Level4, "lvl.4", 2000, 4000),
    (Level::Level5, "lvl.5", 4000, 100_000),
];

impl Level {
    pub fn from_xp(xp: u32) -> Level {
        LEVELS
            .iter()
            .rev()
            .find(|(_, _, min, _)| xp >= *min)
            .map(|(level, _, _, _)| *level)
            .unwrap_or(Level::Level1)
    }

    fn entry(self) -> &'static (Level, &'static str, u32, u32) {
        &LEVELS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn min_xp(self) -> u32 {
        self.entry().2
    }

    /// Upper bound shown as the target for this level.
    pub fn max_xp(self) -> u32 {
        self.entry().3
    }

    /// 1-based level number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `lvl.1` through `lvl.5`.
impl FromStr for Level {
    type Err = QuestlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LEVELS
            .iter()
            .find(|(_, name, _, _)| *name == s)
            .map(|(level, _, _, _)| *level)
            .ok_or_else(|| {
                QuestlogError::InvalidArgument(format!(
                    "invalid level '{s}': level should be lvl.n, where n is an integer from 1 to 5"
                ))
            })
    }
}
