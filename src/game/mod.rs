// src/game/mod.rs

//! Gamified scoring.
//!
//! - [`strategies`] holds the four scoring formulas.
//! - [`mode`] wraps them in the closed [`GameMode`] enum and validates
//!   transitions.
//! - [`presets`] is the fixed mode × difficulty parameter table.
//! - [`manager`] owns the active mode and handles switching.

pub mod manager;
pub mod mode;
pub mod presets;
pub mod strategies;

pub use manager::GameManager;
pub use mode::GameMode;
pub use presets::{preset, preset_params};
pub use strategies::{DecreasingMode, FlatMode, IncreasingMode, PriorityMode};
