// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Read a TOML file into a [`RawConfigFile`].
///
/// Only deserialization happens here; see [`load_and_validate`] for the
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), tasks = config.task.len(), "config parsed");

    Ok(config)
}

/// Load a configuration file and validate it.
///
/// Rejects empty task lists, bad due dates, zero priorities, unknown or
/// self-referencing `after` entries and dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// `Questlog.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Questlog.toml")
}
