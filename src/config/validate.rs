// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{FrontDeskError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::FrontDeskError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_global_config(cfg)?;
    validate_panel(cfg)?;
    validate_desks(cfg)?;
    validate_collaborators(cfg)?;
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.history_limit == 0 {
        return Err(FrontDeskError::ConfigError(
            "[config].history_limit must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_panel(cfg: &RawConfigFile) -> Result<()> {
    if let Some(cmd) = &cfg.panel.speech_command {
        if cmd.first().is_none_or(|program| program.trim().is_empty()) {
            return Err(FrontDeskError::ConfigError(
                "[panel].speech_command must name a program".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_desks(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for desk in cfg.desk.iter() {
        if desk.name.trim().is_empty() {
            return Err(FrontDeskError::ConfigError(
                "[[desk]] entries need a non-empty name".to_string(),
            ));
        }
        if !seen.insert(desk.name.as_str()) {
            return Err(FrontDeskError::ConfigError(format!(
                "desk '{}' is declared more than once",
                desk.name
            )));
        }
    }
    Ok(())
}

fn validate_collaborators(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for collaborator in cfg.collaborator.iter() {
        if !seen.insert(collaborator.registration.as_str()) {
            return Err(FrontDeskError::ConfigError(format!(
                "collaborator registration '{}' is used more than once",
                collaborator.registration
            )));
        }
    }
    Ok(())
}
