#![allow(dead_code)]

use std::collections::BTreeMap;

use questlog::config::{ConfigFile, GameSection, RawConfigFile, TaskConfig};
use questlog::task::Status;
use questlog::types::{Difficulty, GameModeKind};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                game: GameSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.config.task.insert(name.to_string(), task);
        self
    }

    pub fn with_mode(mut self, mode: GameModeKind) -> Self {
        self.config.game.mode = mode;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.config.game.difficulty = Some(difficulty);
        self
    }

    /// The unvalidated config, for tests that expect validation to fail.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(due: &str) -> Self {
        Self {
            task: TaskConfig {
                due: due.to_string(),
                priority: 1,
                description: String::new(),
                labels: vec![],
                status: Status::InProgress,
                after: vec![],
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.task.description = text.to_string();
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.task.labels.push(label.to_string());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.task.status = status;
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}
