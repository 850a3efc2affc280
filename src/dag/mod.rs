// src/dag/mod.rs

//! Dependency graph engine.
//!
//! - [`graph`] builds a [`DependencyGraph`] from a task snapshot and answers
//!   cycle, ordering and pruning queries.
//! - [`urgency`] propagates the earliest due date through dependee chains.

pub mod graph;
pub mod urgency;

pub use graph::{DependencyGraph, InvertedGraph};
