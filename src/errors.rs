// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestlogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A proposed dependency edge would close a cycle. This is an expected,
    /// user-facing refusal rather than a fault.
    #[error("New dependency of '{dependant}' on '{dependee}' would introduce a cyclic dependency")]
    CycleRejected { dependant: String, dependee: String },

    #[error("Cycle detected in dependency graph: {0}")]
    DagCycle(String),

    #[error("Dangling dependency reference: {0}")]
    DanglingReference(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Duplicate task: {0}")]
    DuplicateTask(String),

    #[error("Task '{task}' depends on '{dependee}', which is not completed yet")]
    BlockedByDependency { task: String, dependee: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, QuestlogError>;
