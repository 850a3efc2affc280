// src/config/validate.rs

use std::str::FromStr;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{QuestlogError, Result};
use crate::task::{DueDate, Status};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = QuestlogError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.game, raw.task))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_task_fields(cfg)?;
    validate_task_dependencies(cfg)?;
    validate_completed_dependees(cfg)?;
    validate_dag(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(QuestlogError::ConfigError(
            "config must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_fields(cfg: &RawConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        if name.trim().is_empty() {
            return Err(QuestlogError::ConfigError(
                "task names must not be empty".to_string(),
            ));
        }
        if task.priority == 0 {
            return Err(QuestlogError::ConfigError(format!(
                "task '{name}' has priority 0; priorities start at 1"
            )));
        }
        DueDate::from_str(&task.due).map_err(|e| {
            QuestlogError::ConfigError(format!("task '{name}' has an invalid `due`: {e}"))
        })?;
    }
    Ok(())
}

fn validate_task_dependencies(cfg: &RawConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            if !cfg.task.contains_key(dep) {
                return Err(QuestlogError::ConfigError(format!(
                    "task '{}' has unknown dependency '{}' in `after`",
                    name, dep
                )));
            }
            if dep == name {
                return Err(QuestlogError::ConfigError(format!(
                    "task '{}' cannot depend on itself in `after`",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_completed_dependees(cfg: &RawConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        if task.status != Status::Completed {
            continue;
        }
        for dep in task.after.iter() {
            let dep_done = cfg
                .task
                .get(dep)
                .is_some_and(|d| d.status == Status::Completed);
            if !dep_done {
                return Err(QuestlogError::ConfigError(format!(
                    "task '{}' is completed but its dependency '{}' is not",
                    name, dep
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(cfg: &RawConfigFile) -> Result<()> {
    // Edge direction: dependee -> dependant, so `after = ["A"]` on B adds A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in cfg.task.keys() {
        graph.add_node(name.as_str());
    }

    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(QuestlogError::DagCycle(format!(
            "cycle detected in task dependencies involving task '{}'",
            cycle.node_id()
        ))),
    }
}
