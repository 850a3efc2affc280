// src/task/model.rs

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::QuestlogError;
use crate::task::builder::TaskBuilder;
use crate::task::dependency::DependencySet;

/// Stable task identity.
///
/// Issued once when a task is built and carried through every edit, so
/// dependency references never need re-keying when a dependee changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    InProgress,
    Overdue,
    Completed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::InProgress => "in progress",
            Status::Overdue => "overdue",
            Status::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Task priority. `1` is the most important; larger values rank lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(u32);

impl Priority {
    pub const HIGHEST: Priority = Priority(1);

    pub fn new(value: u32) -> Result<Self, QuestlogError> {
        if value == 0 {
            return Err(QuestlogError::InvalidArgument(
                "priority must be a positive integer (got 0)".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::HIGHEST
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task's due instant, always in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DueDate(DateTime<Utc>);

impl DueDate {
    const DATE_FORMAT: &'static str = "%d-%m-%y";
    const DATE_TIME_FORMAT: &'static str = "%d-%m-%y %H%M";

    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// True once `now` is strictly past the due instant.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now > self.0
    }
}

impl From<DateTime<Utc>> for DueDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::DATE_TIME_FORMAT))
    }
}

/// Accepts `dd-mm-yy` (midnight UTC), `dd-mm-yy HHMM` or RFC 3339.
impl FromStr for DueDate {
    type Err = QuestlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, Self::DATE_TIME_FORMAT) {
            return Ok(Self(Utc.from_utc_datetime(&ndt)));
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, Self::DATE_FORMAT) {
            if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(Utc.from_utc_datetime(&ndt)));
            }
        }

        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|_| {
                QuestlogError::InvalidArgument(format!(
                    "invalid due date '{s}' (expected dd-mm-yy, \"dd-mm-yy HHMM\" or RFC 3339)"
                ))
            })
    }
}

/// One unit of work.
///
/// Fields are private; edits go through the `with_*` methods, each of which
/// returns a new `Task` with the same [`TaskId`].
#[derive(Debug, Clone)]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) name: String,
    pub(crate) due_date: DueDate,
    pub(crate) priority: Priority,
    pub(crate) description: String,
    pub(crate) labels: BTreeSet<String>,
    pub(crate) status: Status,
    pub(crate) dependencies: DependencySet,
}

impl Task {
    pub fn builder(name: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(name)
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn due_date(&self) -> DueDate {
        self.due_date
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    pub fn is_overdue_status(&self) -> bool {
        self.status == Status::Overdue
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == Status::InProgress
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Weaker notion of equality used to reject duplicates: same name and at
    /// least one of due date or priority.
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.name == other.name
            && (self.due_date == other.due_date || self.priority == other.priority)
    }

    pub fn is_dependent_on(&self, dependee: TaskId) -> bool {
        self.dependencies.contains(dependee)
    }

    pub fn with_status(&self, status: Status) -> Task {
        Task {
            status,
            ..self.clone()
        }
    }

    pub fn with_dependencies(&self, dependencies: DependencySet) -> Task {
        Task {
            dependencies,
            ..self.clone()
        }
    }

    pub fn with_dependency_added(&self, dependee: TaskId) -> Task {
        self.with_dependencies(self.dependencies.add(dependee))
    }

    pub fn with_dependency_removed(&self, dependee: TaskId) -> Task {
        self.with_dependencies(self.dependencies.remove(dependee))
    }

    pub fn with_due_date(&self, due_date: DueDate) -> Task {
        Task {
            due_date,
            ..self.clone()
        }
    }

    pub fn with_priority(&self, priority: Priority) -> Task {
        Task {
            priority,
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Task {
        Task {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn with_labels<I, S>(&self, labels: I) -> Task
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Task {
            labels: labels.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Rename the task. Empty names are rejected.
    pub fn with_name(&self, name: impl Into<String>) -> Result<Task, QuestlogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuestlogError::InvalidArgument(
                "task name must not be empty".to_string(),
            ));
        }
        Ok(Task {
            name,
            ..self.clone()
        })
    }
}

/// Value equality: every field except the id and the dependency set.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.due_date == other.due_date
            && self.priority == other.priority
            && self.description == other.description
            && self.labels == other.labels
            && self.status == other.status
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} DueDate: {} Priority: {} Description: {} Labels: [{}] Status: {}",
            self.name,
            self.due_date,
            self.priority,
            self.description,
            self.labels.iter().cloned().collect::<Vec<_>>().join(", "),
            self.status
        )
    }
}
