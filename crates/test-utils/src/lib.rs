pub mod builders;

use std::sync::{Arc, Once};

use chrono::{DateTime, Duration, TimeZone, Utc};
use questlog::clock::MockClock;
use questlog::manager::TaskManager;
use questlog::task::{DueDate, Task, TaskId};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Wednesday 2024-01-10 12:00 UTC; the reference "now" for tests.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
        .single()
        .expect("valid reference instant")
}

/// A mock clock starting at [`reference_now`].
pub fn mock_clock() -> Arc<MockClock> {
    Arc::new(MockClock::new(reference_now()))
}

/// Due date `days` (may be negative) away from [`reference_now`].
pub fn due_in_days(days: i64) -> DueDate {
    DueDate::new(reference_now() + Duration::days(days))
}

/// Due date `hours` away from [`reference_now`].
pub fn due_in_hours(hours: i64) -> DueDate {
    DueDate::new(reference_now() + Duration::hours(hours))
}

/// In-progress task due `days` from [`reference_now`].
pub fn task(name: &str, days: i64) -> Task {
    Task::builder(name)
        .due_date(due_in_days(days))
        .build()
        .expect("valid test task")
}

/// `names[0] <- names[1] <- ...`: each task depends on the previous one.
///
/// Due dates are one day apart starting `first_due_days` from now.
pub fn chain(names: &[&str], first_due_days: i64) -> Vec<Task> {
    let mut out: Vec<Task> = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let mut t = task(name, first_due_days + i as i64);
        if let Some(prev) = out.last() {
            t = t.with_dependency_added(prev.id());
        }
        out.push(t);
    }
    out
}

/// A manager on a fresh mock clock, plus the clock for time travel.
pub fn manager() -> (TaskManager, Arc<MockClock>) {
    let clock = mock_clock();
    (TaskManager::new(clock.clone()), clock)
}

/// Add tasks and return their ids in the same order.
pub fn add_all(manager: &mut TaskManager, tasks: Vec<Task>) -> Vec<TaskId> {
    tasks
        .into_iter()
        .map(|t| {
            let id = t.id();
            manager.add_task(t).expect("task should be accepted");
            id
        })
        .collect()
}
