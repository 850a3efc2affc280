// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::task::Status;
use crate::types::{Difficulty, GameModeKind};

/// Raw configuration as read from a TOML file.
///
/// ```toml
/// [game]
/// mode = "decreasing"
/// difficulty = "hard"
///
/// [task.draft]
/// due = "01-10-19"
/// priority = 2
/// labels = ["writing"]
///
/// [task.review]
/// due = "03-10-19 1700"
/// after = ["draft"]
/// ```
///
/// This type has not been validated. Use [`ConfigFile`] (via `TryFrom`) for
/// a checked version.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub game: GameSection,

    /// Keys are task names.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub game: GameSection,
    pub task: BTreeMap<String, TaskConfig>,
}

impl ConfigFile {
    /// Internal constructor used by validation logic.
    pub(crate) fn new_unchecked(game: GameSection, task: BTreeMap<String, TaskConfig>) -> Self {
        Self { game, task }
    }
}

/// `[game]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameSection {
    #[serde(default)]
    pub mode: GameModeKind,

    /// When set, the mode uses the preset parameters for this difficulty.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// `dd-mm-yy`, `dd-mm-yy HHMM` or RFC 3339.
    pub due: String,

    #[serde(default = "default_priority")]
    pub priority: u32,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub status: Status,

    /// Names of the tasks this one depends on.
    #[serde(default)]
    pub after: Vec<String>,
}

fn default_priority() -> u32 {
    1
}
