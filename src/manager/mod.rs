// src/manager/mod.rs

//! Task collection orchestrator.
//!
//! [`TaskManager`] owns the task snapshot, the achievement record, the game
//! manager and the clock. Every mutation builds the proposed snapshot first,
//! validates it (identity clashes, cycles, blocked completions) and only then
//! replaces the stored tasks, so a failed operation never leaves partial
//! changes behind.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::achievement::{AchievementRecord, Level};
use crate::clock::{Clock, SystemClock};
use crate::dag::DependencyGraph;
use crate::errors::{QuestlogError, Result};
use crate::game::{GameManager, GameMode};
use crate::task::{DueDate, Status, Task, TaskId};
use crate::types::{Difficulty, DisplayOption, GameModeKind, Period};

/// Result of [`TaskManager::toggle_dependency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyToggle {
    Added,
    Removed,
}

#[derive(Debug)]
pub struct TaskManager {
    tasks: Vec<Task>,
    achievements: AchievementRecord,
    game: GameManager,
    clock: Arc<dyn Clock>,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl TaskManager {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let achievements = AchievementRecord::new(clock.now());
        Self {
            tasks: Vec::new(),
            achievements,
            game: GameManager::new(),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ---- task collection -------------------------------------------------

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// First task with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name() == name)
    }

    fn require(&self, id: TaskId) -> Result<&Task> {
        self.get(id)
            .ok_or_else(|| QuestlogError::TaskNotFound(id.to_string()))
    }

    fn position(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| QuestlogError::TaskNotFound(id.to_string()))
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks
            .iter()
            .any(|t| t.id() == task.id() || t.is_same_task(task))
    }

    /// Add a new task. Rejects tasks that clash with an existing one, and
    /// tasks whose dependencies would close a cycle.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if let Some(existing) = self
            .tasks
            .iter()
            .find(|t| t.id() == task.id() || t.is_same_task(&task))
        {
            return Err(QuestlogError::DuplicateTask(format!(
                "'{}' clashes with existing task '{}'",
                task.name(),
                existing.name()
            )));
        }

        self.ensure_acyclic(&task)?;

        info!(task = %task.name(), id = %task.id(), "task added");
        self.tasks.push(task);
        Ok(())
    }

    /// Replace the task with id `target` by `edited`.
    ///
    /// `edited` must carry the same id (it should come from a `with_*` edit
    /// of the stored task) and must not clash with any other task. Status is
    /// not editable here: completion goes through [`complete_task`](Self::complete_task)
    /// and overdue marking through [`update_overdue`](Self::update_overdue).
    pub fn update_task(&mut self, target: TaskId, edited: Task) -> Result<()> {
        let index = self.position(target)?;

        if edited.id() != target {
            return Err(QuestlogError::InvalidArgument(format!(
                "edited task '{}' is not a version of the target task",
                edited.name()
            )));
        }

        if edited.status() != self.tasks[index].status() {
            return Err(QuestlogError::InvalidArgument(format!(
                "cannot change the status of '{}' from {} to {} through an edit",
                edited.name(),
                self.tasks[index].status(),
                edited.status()
            )));
        }

        if let Some(clash) = self
            .tasks
            .iter()
            .find(|t| t.id() != target && t.is_same_task(&edited))
        {
            return Err(QuestlogError::DuplicateTask(format!(
                "'{}' clashes with existing task '{}'",
                edited.name(),
                clash.name()
            )));
        }

        self.ensure_acyclic(&edited)?;

        debug!(task = %edited.name(), id = %target, "task updated");
        self.tasks[index] = edited;
        Ok(())
    }

    /// Remove a task and every dependency reference to it.
    pub fn remove_task(&mut self, id: TaskId) -> Result<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);

        for task in self.tasks.iter_mut() {
            if task.is_dependent_on(id) {
                debug!(
                    task = %task.name(),
                    dependee = %removed.name(),
                    "dropping dependency on removed task"
                );
                *task = task.with_dependency_removed(id);
            }
        }

        info!(task = %removed.name(), id = %id, "task removed");
        Ok(removed)
    }

    // ---- dependencies ----------------------------------------------------

    fn ensure_acyclic(&self, candidate: &Task) -> Result<()> {
        if candidate.dependencies().is_empty() {
            return Ok(());
        }
        let graph = DependencyGraph::from_tasks(&self.tasks);
        if graph.would_cycle(candidate) {
            let dependee = candidate
                .dependencies()
                .iter()
                .map(|id| graph.name_of(id))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(QuestlogError::CycleRejected {
                dependant: candidate.name().to_string(),
                dependee,
            });
        }
        Ok(())
    }

    /// Make `dependant` depend on `dependee`, or drop that dependency if it
    /// already exists.
    ///
    /// Adding is refused with [`QuestlogError::CycleRejected`] when the new
    /// edge would close a cycle; the collection is left unchanged.
    pub fn toggle_dependency(
        &mut self,
        dependant: TaskId,
        dependee: TaskId,
    ) -> Result<DependencyToggle> {
        let index = self.position(dependant)?;
        let dependee_task = self.require(dependee)?;
        let dependee_name = dependee_task.name().to_string();
        let current = &self.tasks[index];

        if current.is_dependent_on(dependee) {
            let updated = current.with_dependency_removed(dependee);
            info!(task = %updated.name(), dependee = %dependee_name, "dependency removed");
            self.tasks[index] = updated;
            return Ok(DependencyToggle::Removed);
        }

        let updated = current.with_dependency_added(dependee);
        let graph = DependencyGraph::from_tasks(&self.tasks);
        if graph.would_cycle(&updated) {
            warn!(
                task = %updated.name(),
                dependee = %dependee_name,
                "dependency rejected: it would introduce a cycle"
            );
            return Err(QuestlogError::CycleRejected {
                dependant: updated.name().to_string(),
                dependee: dependee_name,
            });
        }

        info!(task = %updated.name(), dependee = %dependee_name, "dependency added");
        self.tasks[index] = updated;
        Ok(DependencyToggle::Added)
    }

    /// True if some completed task depends on a task that is not completed.
    pub fn has_invalid_dependencies(&self) -> bool {
        self.tasks.iter().filter(|t| t.is_completed()).any(|done| {
            done.dependencies()
                .iter()
                .filter_map(|id| self.get(id))
                .any(|dep| !dep.is_completed())
        })
    }

    /// Tasks ordered so that every dependee comes before its dependants.
    pub fn topological_order(&self) -> Result<Vec<&Task>> {
        let graph = DependencyGraph::from_tasks(&self.tasks);
        let by_id: HashMap<TaskId, &Task> = self.tasks.iter().map(|t| (t.id(), t)).collect();

        graph
            .topological_order()?
            .into_iter()
            .map(|id| {
                by_id
                    .get(&id)
                    .copied()
                    .ok_or_else(|| QuestlogError::TaskNotFound(id.to_string()))
            })
            .collect()
    }

    /// Earliest due date among the task and everything it transitively
    /// depends on.
    pub fn earliest_dependent_due_date(&self, id: TaskId) -> Result<DueDate> {
        self.require(id)?;
        DependencyGraph::from_tasks(&self.tasks).earliest_dependent_due_date_of(id)
    }

    // ---- status transitions ----------------------------------------------

    fn first_blocking_dependee(&self, task: &Task, tasks: &[Task]) -> Option<String> {
        task.dependencies()
            .iter()
            .filter_map(|id| tasks.iter().find(|t| t.id() == id))
            .find(|dep| !dep.is_completed())
            .map(|dep| dep.name().to_string())
    }

    /// Mark a task completed, award XP under the active game mode and
    /// return the amount awarded.
    pub fn complete_task(&mut self, id: TaskId) -> Result<u32> {
        let index = self.position(id)?;
        let now = self.now();
        let (completed, xp) = self.appraise_completion(&self.tasks[index], &self.tasks, now)?;

        info!(task = %completed.name(), xp, "task completed");
        self.tasks[index] = completed;
        self.achievements.record_xp(xp, now);
        Ok(xp)
    }

    fn appraise_completion(
        &self,
        task: &Task,
        snapshot: &[Task],
        now: DateTime<Utc>,
    ) -> Result<(Task, u32)> {
        if task.is_completed() {
            return Err(QuestlogError::InvalidArgument(format!(
                "task '{}' is already completed",
                task.name()
            )));
        }
        if let Some(dependee) = self.first_blocking_dependee(task, snapshot) {
            return Err(QuestlogError::BlockedByDependency {
                task: task.name().to_string(),
                dependee,
            });
        }
        // A task past its due date is scored as overdue even if no sweep has
        // flagged it yet.
        let from = if task.is_in_progress() && task.due_date().is_overdue(now) {
            debug!(task = %task.name(), due = %task.due_date(), "completing a task past its due date");
            task.with_status(Status::Overdue)
        } else {
            task.clone()
        };
        let completed = task.with_status(Status::Completed);
        let xp = self.game.appraise_xp_change(&from, &completed, now)?;
        Ok((completed, xp))
    }

    /// Complete every unfinished task carrying `label`, dependees first.
    ///
    /// All or nothing: if any of them is blocked by an unfinished task
    /// outside the batch, nothing is completed. Returns the total XP awarded.
    pub fn complete_tasks_with_label(&mut self, label: &str) -> Result<u32> {
        let now = self.now();
        let order: Vec<TaskId> = self
            .topological_order()?
            .into_iter()
            .filter(|t| t.has_label(label) && !t.is_completed())
            .map(|t| t.id())
            .collect();

        if order.is_empty() {
            return Err(QuestlogError::TaskNotFound(format!(
                "no unfinished task is labelled '{label}'"
            )));
        }

        let mut working = self.tasks.clone();
        let mut awards = Vec::with_capacity(order.len());

        for id in order {
            let index = working
                .iter()
                .position(|t| t.id() == id)
                .ok_or_else(|| QuestlogError::TaskNotFound(id.to_string()))?;
            let (completed, xp) = self.appraise_completion(&working[index], &working, now)?;
            debug!(task = %completed.name(), xp, "completing labelled task");
            working[index] = completed;
            awards.push(xp);
        }

        self.tasks = working;
        for xp in awards.iter() {
            self.achievements.record_xp(*xp, now);
        }

        let total: u32 = awards.iter().sum();
        info!(label, tasks = awards.len(), xp = total, "labelled tasks completed");
        Ok(total)
    }

    /// Move every in-progress task whose due date has passed to `Overdue`.
    /// Returns how many tasks changed.
    pub fn update_overdue(&mut self) -> usize {
        let now = self.now();
        let mut changed = 0;

        for task in self.tasks.iter_mut() {
            if task.is_in_progress() && task.due_date().is_overdue(now) {
                debug!(task = %task.name(), due = %task.due_date(), "task is now overdue");
                *task = task.with_status(Status::Overdue);
                changed += 1;
            }
        }

        if changed > 0 {
            info!(count = changed, "tasks marked overdue");
        }
        changed
    }

    // ---- game ------------------------------------------------------------

    pub fn game_mode(&self) -> &GameMode {
        self.game.mode()
    }

    pub fn set_game_mode(&mut self, kind: GameModeKind) {
        self.game.set_mode(kind);
    }

    pub fn set_game_mode_with_difficulty(&mut self, kind: GameModeKind, difficulty: Difficulty) {
        self.game.set_mode_with_difficulty(kind, difficulty);
    }

    /// XP that turning `from` into `to` would earn right now.
    pub fn appraise_xp_change(&self, from: &Task, to: &Task) -> Result<u32> {
        self.game.appraise_xp_change(from, to, self.now())
    }

    // ---- achievements ----------------------------------------------------

    pub fn achievements(&self) -> &AchievementRecord {
        &self.achievements
    }

    pub fn cumulative_xp(&self) -> u32 {
        self.achievements.cumulative_xp()
    }

    pub fn level(&self) -> Level {
        self.achievements.level()
    }

    pub fn windowed_xp(&mut self, period: Period) -> u32 {
        let now = self.now();
        self.achievements.windowed_xp(period, now)
    }

    pub fn windowed_completed_count(&mut self, period: Period) -> u32 {
        let now = self.now();
        self.achievements.windowed_completed_count(period, now)
    }

    pub fn set_display_option(&mut self, option: DisplayOption) {
        self.achievements.set_display_option(option);
    }
}
