// src/config/model.rs

use serde::Deserialize;

use crate::engine::history::DEFAULT_HISTORY_LIMIT;
use crate::registry::{Desk, NewCollaborator, NewPatient};
use crate::types::Profile;

/// Default minimum age (in years) for a priority ticket at the kiosk.
pub const DEFAULT_PRIORITY_AGE: u32 = 60;

/// Configuration exactly as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// history_limit = 10
/// priority_age = 60
///
/// [access]
/// admin_password = "admin"
///
/// [panel]
/// speech_command = ["espeak", "-v", "pt"]
///
/// [[desk]]
/// name = "Guiche 1"
/// attendant = "Joao Silva"
///
/// [[collaborator]]
/// first_name = "Joao"
/// last_name = "Silva"
/// registration = "atd001"
/// profile = "atendente"
/// password = "123"
///
/// [[patient]]
/// first_name = "Ana"
/// last_name = "Lima"
/// cpf = "12345678900"
/// dob = "1950-04-21"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub access: AccessSection,

    #[serde(default)]
    pub panel: PanelSection,

    /// Desks from `[[desk]]`.
    #[serde(default)]
    pub desk: Vec<Desk>,

    /// Collaborators from `[[collaborator]]`.
    #[serde(default)]
    pub collaborator: Vec<NewCollaborator>,

    /// Patients from `[[patient]]`.
    #[serde(default)]
    pub patient: Vec<NewPatient>,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// [`Default`], so holders can rely on desk names and registrations being
/// unique and `history_limit >= 1`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub access: AccessSection,
    pub panel: PanelSection,
    pub desk: Vec<Desk>,
    pub collaborator: Vec<NewCollaborator>,
    pub patient: Vec<NewPatient>,
}

impl ConfigFile {
    /// Setup used when no config file exists: default sections plus the two
    /// starter attendants, `atd001` and `atd002` (password `123`).
    pub fn builtin() -> Self {
        let attendant = |first: &str, last: &str, registration: &str| NewCollaborator {
            first_name: first.to_string(),
            last_name: last.to_string(),
            registration: registration.to_string(),
            profile: Profile::Attendant,
            password: Some("123".to_string()),
        };

        Self {
            collaborator: vec![
                attendant("Joao", "Silva", "atd001"),
                attendant("Maria", "Souza", "atd002"),
            ],
            ..Self::default()
        }
    }

    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            config: raw.config,
            access: raw.access,
            panel: raw.panel,
            desk: raw.desk,
            collaborator: raw.collaborator,
            patient: raw.patient,
        }
    }
}

/// `[config]` section: engine limits and kiosk rules.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// How many calls the display panel history keeps.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Patients at least this old get a priority ticket at the kiosk.
    #[serde(default = "default_priority_age")]
    pub priority_age: u32,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_priority_age() -> u32 {
    DEFAULT_PRIORITY_AGE
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            priority_age: default_priority_age(),
        }
    }
}

/// `[access]` section: the two built-in console accounts.
///
/// Attendants log in with their collaborator registration instead.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessSection {
    #[serde(default = "default_admin_user")]
    pub admin_user: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_panel_user")]
    pub panel_user: String,
    #[serde(default = "default_panel_password")]
    pub panel_password: String,
}

fn default_admin_user() -> String {
    "administrador".to_string()
}

fn default_admin_password() -> String {
    "admin".to_string()
}

fn default_panel_user() -> String {
    "painel".to_string()
}

fn default_panel_password() -> String {
    "painel".to_string()
}

impl Default for AccessSection {
    fn default() -> Self {
        Self {
            admin_user: default_admin_user(),
            admin_password: default_admin_password(),
            panel_user: default_panel_user(),
            panel_password: default_panel_password(),
        }
    }
}

/// `[panel]` section: how calls are announced.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PanelSection {
    /// Program (plus leading arguments) that speaks an announcement. The
    /// announcement text is appended as the last argument.
    ///
    /// If `None`, calls are only printed.
    #[serde(default)]
    pub speech_command: Option<Vec<String>>,
}
