// src/registry/records.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CollaboratorId, DeskName, PatientId, Profile};

/// A named service point staffed by one attendant.
///
/// Mirrors a `[[desk]]` entry in the config file:
///
/// ```toml
/// [[desk]]
/// name = "Guiche 1"
/// attendant = "Joao Silva"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    pub name: DeskName,
    /// Display name of the attendant working this desk.
    pub attendant: String,
}

impl Desk {
    pub fn new(name: impl Into<String>, attendant: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attendant: attendant.into(),
        }
    }
}

/// A registered staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaborator {
    pub id: CollaboratorId,
    pub first_name: String,
    pub last_name: String,
    /// Login name used at the console.
    pub registration: String,
    pub profile: Profile,
    pub password: Option<String>,
}

impl Collaborator {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Collaborator data before an id has been assigned.
///
/// This is also the shape of a `[[collaborator]]` config entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCollaborator {
    pub first_name: String,
    pub last_name: String,
    pub registration: String,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub password: Option<String>,
}

impl NewCollaborator {
    pub(crate) fn with_id(self, id: CollaboratorId) -> Collaborator {
        Collaborator {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            registration: self.registration,
            profile: self.profile,
            password: self.password,
        }
    }
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    /// Date of birth.
    pub dob: NaiveDate,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years on `today`.
    ///
    /// Returns 0 for birth dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.dob).unwrap_or(0)
    }
}

/// Patient data before an id has been assigned.
///
/// This is also the shape of a `[[patient]]` config entry; `dob` is an
/// ISO-8601 date such as `"1950-04-21"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub dob: NaiveDate,
}

impl NewPatient {
    pub(crate) fn with_id(self, id: PatientId) -> Patient {
        Patient {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            cpf: self.cpf,
            dob: self.dob,
        }
    }
}
