#![allow(dead_code)]

use chrono::NaiveDate;
use frontdesk::config::{ConfigFile, RawConfigFile};
use frontdesk::engine::DispatchEngine;
use frontdesk::registry::{Desk, NewCollaborator, NewPatient};
use frontdesk::types::Profile;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn with_desk(mut self, name: &str, attendant: &str) -> Self {
        self.config.desk.push(Desk::new(name, attendant));
        self
    }

    pub fn with_collaborator(mut self, collaborator: NewCollaborator) -> Self {
        self.config.collaborator.push(collaborator);
        self
    }

    pub fn with_patient(mut self, patient: NewPatient) -> Self {
        self.config.patient.push(patient);
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.config.history_limit = limit;
        self
    }

    pub fn priority_age(mut self, age: u32) -> Self {
        self.config.config.priority_age = age;
        self
    }

    /// The raw, unvalidated config (for testing validation itself).
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `NewCollaborator`; defaults to an attendant.
pub struct CollaboratorBuilder {
    collaborator: NewCollaborator,
}

impl CollaboratorBuilder {
    pub fn new(first_name: &str, last_name: &str, registration: &str) -> Self {
        Self {
            collaborator: NewCollaborator {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                registration: registration.to_string(),
                profile: Profile::Attendant,
                password: None,
            },
        }
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.collaborator.profile = profile;
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.collaborator.password = Some(password.to_string());
        self
    }

    pub fn build(self) -> NewCollaborator {
        self.collaborator
    }
}

/// Shorthand for a `NewPatient` with an ISO date of birth.
pub fn patient(first_name: &str, last_name: &str, cpf: &str, dob: &str) -> NewPatient {
    NewPatient {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        cpf: cpf.to_string(),
        dob: date(dob),
    }
}

/// Parse `YYYY-MM-DD`.
pub fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("invalid test date")
}

/// An engine with one desk per name, each staffed by "Attendant <name>".
pub fn engine_with_desks(names: &[&str]) -> DispatchEngine {
    let mut engine = DispatchEngine::default();
    for name in names {
        engine.add_desk(Desk::new(*name, format!("Attendant {name}")));
    }
    engine
}
