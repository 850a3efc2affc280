// src/task/mod.rs

//! Immutable task values.
//!
//! - [`model`] holds [`Task`] and its field types.
//! - [`dependency`] holds the value-returning [`DependencySet`].
//! - [`builder`] validates fields and issues a fresh [`TaskId`].
//!
//! Tasks are never mutated in place; every edit goes through a `with_*`
//! method that returns a new value carrying the same id.

pub mod builder;
pub mod dependency;
pub mod model;

pub use builder::TaskBuilder;
pub use dependency::DependencySet;
pub use model::{DueDate, Priority, Status, Task, TaskId};
