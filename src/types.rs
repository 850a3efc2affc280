use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::QuestlogError;

/// Which scoring strategy is active.
///
/// Names are matched exactly and case-sensitively, so `"flat"` parses but
/// `"Flat"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameModeKind {
    #[default]
    Flat,
    Decreasing,
    Increasing,
    Priority,
}

impl GameModeKind {
    pub const ALL: [GameModeKind; 4] = [
        GameModeKind::Flat,
        GameModeKind::Decreasing,
        GameModeKind::Increasing,
        GameModeKind::Priority,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameModeKind::Flat => "flat",
            GameModeKind::Decreasing => "decreasing",
            GameModeKind::Increasing => "increasing",
            GameModeKind::Priority => "priority",
        }
    }
}

impl fmt::Display for GameModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameModeKind {
    type Err = QuestlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameModeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                QuestlogError::InvalidArgument(format!(
                    "invalid game mode: {s} (expected \"flat\", \"decreasing\", \"increasing\" or \"priority\")"
                ))
            })
    }
}

/// Difficulty preset applied together with a game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuestlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                QuestlogError::InvalidArgument(format!(
                    "invalid game difficulty: {s} (expected \"easy\", \"medium\", \"hard\" or \"extreme\")"
                ))
            })
    }
}

/// Time window used by the achievement counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Day,
    Week,
}

/// Which achievement figures a front end should show.
///
/// - `AllTime`: cumulative XP against the current level's cap.
/// - `Today` / `ThisWeek`: the windowed XP and completion counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOption {
    #[default]
    AllTime,
    Today,
    ThisWeek,
}

impl DisplayOption {
    /// The windowed period backing this option, if any.
    pub fn period(self) -> Option<Period> {
        match self {
            DisplayOption::AllTime => None,
            DisplayOption::Today => Some(Period::Day),
            DisplayOption::ThisWeek => Some(Period::Week),
        }
    }
}
