// src/config/mod.rs

//! Task list and game settings loaded from TOML.
//!
//! - `model.rs`: serde-backed raw and validated models.
//! - `loader.rs`: reading files from disk.
//! - `validate.rs`: field checks and the dependency cycle check.
//! - `seed.rs`: turning a validated file into a [`TaskManager`](crate::manager::TaskManager).

pub mod loader;
pub mod model;
pub mod seed;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, GameSection, RawConfigFile, TaskConfig};
