// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (duplicate desks, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - `history_limit` of zero,
///   - duplicate desk names and collaborator registrations,
///   - an empty speech command.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the config at `path` if one was given, otherwise fall back to
/// [`default_config_path`] when that file exists, and to
/// [`ConfigFile::builtin`] when it does not.
pub fn load_or_default(path: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = path {
        return load_and_validate(path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        info!(path = %default_path.display(), "using config from working directory");
        return load_and_validate(default_path);
    }

    info!("no config file found; starting with built-in defaults");
    Ok(ConfigFile::builtin())
}

/// `Frontdesk.toml` in the current working directory, unless the
/// `FRONTDESK_CONFIG` environment variable points elsewhere.
pub fn default_config_path() -> PathBuf {
    std::env::var_os("FRONTDESK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Frontdesk.toml"))
}
