// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Queue actions never fail; these errors come from loading config, reading
//! console input and talking to the display panel.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontDeskError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, FrontDeskError>;
