// src/lib.rs

pub mod achievement;
pub mod cli;
pub mod clock;
pub mod config;
pub mod dag;
pub mod errors;
pub mod game;
pub mod logging;
pub mod manager;
pub mod task;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::manager::TaskManager;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the task list, seeds a [`TaskManager`], marks tasks
/// that are past due, and prints them in dependency order.
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let clock = clock_from_args(args.now.as_deref())?;
    let mut manager = cfg.build_task_manager(clock)?;

    let overdue = manager.update_overdue();
    info!(overdue, "overdue check done");

    print_summary(&manager)
}

fn clock_from_args(now: Option<&str>) -> Result<Arc<dyn Clock>> {
    match now {
        Some(raw) => {
            let instant = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("--now expects an RFC 3339 timestamp, got '{raw}'"))?
                .with_timezone(&Utc);
            Ok(Arc::new(FixedClock(instant)))
        }
        None => Ok(Arc::new(SystemClock)),
    }
}

fn print_summary(manager: &TaskManager) -> Result<()> {
    let mode = manager.game_mode();
    println!("game mode: {} ({})", mode.name(), mode.description());
    println!(
        "level: {} ({} / {} xp)",
        manager.level(),
        manager.cumulative_xp(),
        manager.achievements().level_max_xp()
    );
    println!();

    let ordered = manager.topological_order()?;
    println!("tasks ({}):", ordered.len());
    for task in ordered {
        let urgency = manager.earliest_dependent_due_date(task.id())?;
        println!("  - {} [{}] due {}", task.name(), task.status(), task.due_date());
        if urgency != task.due_date() {
            println!("      earliest dependent due: {urgency}");
        }
        if !task.dependencies().is_empty() {
            let names: Vec<&str> = task
                .dependencies()
                .iter()
                .filter_map(|id| manager.get(id))
                .map(|t| t.name())
                .collect();
            println!("      after: {names:?}");
        }
    }

    Ok(())
}

/// Print the parsed task list without building anything.
fn print_dry_run(cfg: &ConfigFile) {
    println!("questlog dry-run");
    println!("  game.mode = {}", cfg.game.mode);
    if let Some(difficulty) = cfg.game.difficulty {
        println!("  game.difficulty = {difficulty}");
    }
    println!();

    println!("tasks ({}):", cfg.task.len());
    for (name, task) in cfg.task.iter() {
        println!("  - {name}");
        println!("      due: {}", task.due);
        println!("      priority: {}", task.priority);
        println!("      status: {}", task.status);
        if !task.description.is_empty() {
            println!("      description: {}", task.description);
        }
        if !task.labels.is_empty() {
            println!("      labels: {:?}", task.labels);
        }
        if !task.after.is_empty() {
            println!("      after: {:?}", task.after);
        }
    }

    debug!("dry-run complete");
}
