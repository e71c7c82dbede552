// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sequential ticket number handed out at issuance.
///
/// Ticket ids start at 1 and are never reused for the lifetime of the
/// process, regardless of which queue the ticket lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a collaborator when it is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CollaboratorId(pub u64);

impl fmt::Display for CollaboratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a patient when it is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PatientId(pub u64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical desk name type used throughout the engine.
pub type DeskName = String;

/// Role a collaborator plays at the front desk.
///
/// The serialized names follow the clinic's own vocabulary, so config files
/// read `profile = "atendente"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    #[serde(rename = "administrador")]
    Administrator,
    #[serde(rename = "painel")]
    Panel,
    #[serde(rename = "atendente")]
    Attendant,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Attendant
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Profile::Administrator => "administrador",
            Profile::Panel => "painel",
            Profile::Attendant => "atendente",
        };
        f.write_str(s)
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "administrador" | "admin" => Ok(Profile::Administrator),
            "painel" | "panel" => Ok(Profile::Panel),
            "atendente" | "attendant" => Ok(Profile::Attendant),
            other => Err(format!(
                "invalid profile: {other} (expected \"administrador\", \"painel\" or \"atendente\")"
            )),
        }
    }
}
