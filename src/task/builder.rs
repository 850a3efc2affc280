// src/task/builder.rs

use std::collections::BTreeSet;

use crate::errors::{QuestlogError, Result};
use crate::task::dependency::DependencySet;
use crate::task::model::{DueDate, Priority, Status, Task, TaskId};

/// Builder for a new [`Task`].
///
/// `build` validates the name, requires a due date and issues a fresh
/// [`TaskId`].
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    name: String,
    due_date: Option<DueDate>,
    priority: Priority,
    description: String,
    labels: BTreeSet<String>,
    status: Status,
    dependencies: DependencySet,
}

impl TaskBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: None,
            priority: Priority::default(),
            description: String::new(),
            labels: BTreeSet::new(),
            status: Status::default(),
            dependencies: DependencySet::new(),
        }
    }

    pub fn due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn depends_on(mut self, dependee: TaskId) -> Self {
        self.dependencies = self.dependencies.add(dependee);
        self
    }

    pub fn build(self) -> Result<Task> {
        if self.name.trim().is_empty() {
            return Err(QuestlogError::InvalidArgument(
                "task name must not be empty".to_string(),
            ));
        }

        let due_date = self.due_date.ok_or_else(|| {
            QuestlogError::InvalidArgument(format!("task '{}' has no due date", self.name))
        })?;

        Ok(Task {
            id: TaskId::new(),
            name: self.name,
            due_date,
            priority: self.priority,
            description: self.description,
            labels: self.labels,
            status: self.status,
            dependencies: self.dependencies,
        })
    }
}
