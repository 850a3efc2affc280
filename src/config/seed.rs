// src/config/seed.rs

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use crate::clock::Clock;
use crate::config::model::ConfigFile;
use crate::errors::{QuestlogError, Result};
use crate::manager::TaskManager;
use crate::task::{DueDate, Priority, Task, TaskId};

impl ConfigFile {
    /// Build a [`TaskManager`] holding every configured task.
    ///
    /// Tasks are added in key order. `after` names are resolved to the ids
    /// issued for this load, and the `[game]` section selects the mode.
    pub fn build_task_manager(&self, clock: Arc<dyn Clock>) -> Result<TaskManager> {
        let mut manager = TaskManager::new(clock);

        match self.game.difficulty {
            Some(difficulty) => manager.set_game_mode_with_difficulty(self.game.mode, difficulty),
            None => manager.set_game_mode(self.game.mode),
        }

        let mut tasks: Vec<Task> = Vec::with_capacity(self.task.len());
        for (name, cfg) in self.task.iter() {
            let task = Task::builder(name.as_str())
                .due_date(DueDate::from_str(&cfg.due)?)
                .priority(Priority::new(cfg.priority)?)
                .description(cfg.description.as_str())
                .labels(cfg.labels.iter().cloned())
                .status(cfg.status)
                .build()?;
            tasks.push(task);
        }

        let ids: HashMap<&str, TaskId> = tasks.iter().map(|t| (t.name(), t.id())).collect();
        let mut resolved = Vec::with_capacity(tasks.len());
        for task in tasks.iter() {
            let mut linked = task.clone();
            for dep in self.task.get(task.name()).map(|c| c.after.as_slice()).unwrap_or_default() {
                let dep_id = ids.get(dep.as_str()).copied().ok_or_else(|| {
                    QuestlogError::ConfigError(format!(
                        "task '{}' has unknown dependency '{}' in `after`",
                        task.name(),
                        dep
                    ))
                })?;
                linked = linked.with_dependency_added(dep_id);
            }
            resolved.push(linked);
        }

        for task in resolved {
            manager.add_task(task)?;
        }

        info!(
            tasks = manager.len(),
            mode = manager.game_mode().name(),
            "task manager seeded from config"
        );
        Ok(manager)
    }
}
