// src/registry/store.rs

use tracing::debug;

use crate::registry::records::{Collaborator, Desk, NewCollaborator, NewPatient, Patient};
use crate::types::{CollaboratorId, PatientId};

/// Result of a registry edit.
///
/// Edits that cannot apply (`Duplicate`, `NotFound`) leave the registry
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryOutcome {
    Added,
    Removed,
    /// A desk with the same name already exists.
    Duplicate,
    NotFound,
}

/// Plain collections of desks, collaborators and patients.
///
/// Collaborator and patient ids come from per-collection counters, so an id
/// is never handed out twice even after the record it named is removed.
#[derive(Debug, Default)]
pub struct Registry {
    desks: Vec<Desk>,
    collaborators: Vec<Collaborator>,
    patients: Vec<Patient>,
    last_collaborator_id: u64,
    last_patient_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desks(&self) -> &[Desk] {
        &self.desks
    }

    pub fn collaborators(&self) -> &[Collaborator] {
        &self.collaborators
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn find_desk(&self, name: &str) -> Option<&Desk> {
        self.desks.iter().find(|d| d.name == name)
    }

    /// CPFs are compared on their digits only, so `123.456.789-00` and
    /// `12345678900` name the same patient. Input without digits matches
    /// nobody.
    pub fn find_patient_by_cpf(&self, cpf: &str) -> Option<&Patient> {
        let wanted = cpf_digits(cpf);
        if wanted.is_empty() {
            return None;
        }
        self.patients.iter().find(|p| cpf_digits(&p.cpf) == wanted)
    }

    /// Desk names are unique; a second desk with an existing name is refused.
    pub fn add_desk(&mut self, desk: Desk) -> RegistryOutcome {
        if self.find_desk(&desk.name).is_some() {
            debug!(desk = %desk.name, "refusing duplicate desk name");
            return RegistryOutcome::Duplicate;
        }
        debug!(desk = %desk.name, attendant = %desk.attendant, "desk added");
        self.desks.push(desk);
        RegistryOutcome::Added
    }

    pub fn remove_desk(&mut self, name: &str) -> RegistryOutcome {
        let before = self.desks.len();
        self.desks.retain(|d| d.name != name);
        removal_outcome(before, self.desks.len())
    }

    pub fn find_collaborator(&self, registration: &str) -> Option<&Collaborator> {
        self.collaborators
            .iter()
            .find(|c| c.registration == registration)
    }

    /// Registrations are login names and must be unique; a collaborator
    /// reusing one is refused with `None` and takes no id.
    pub fn add_collaborator(&mut self, new: NewCollaborator) -> Option<CollaboratorId> {
        if self.find_collaborator(&new.registration).is_some() {
            debug!(registration = %new.registration, "refusing duplicate registration");
            return None;
        }
        self.last_collaborator_id += 1;
        let id = CollaboratorId(self.last_collaborator_id);
        debug!(%id, registration = %new.registration, "collaborator added");
        self.collaborators.push(new.with_id(id));
        Some(id)
    }

    pub fn remove_collaborator(&mut self, id: CollaboratorId) -> RegistryOutcome {
        let before = self.collaborators.len();
        self.collaborators.retain(|c| c.id != id);
        removal_outcome(before, self.collaborators.len())
    }

    pub fn add_patient(&mut self, new: NewPatient) -> PatientId {
        self.last_patient_id += 1;
        let id = PatientId(self.last_patient_id);
        debug!(%id, "patient added");
        self.patients.push(new.with_id(id));
        id
    }

    pub fn remove_patient(&mut self, id: PatientId) -> RegistryOutcome {
        let before = self.patients.len();
        self.patients.retain(|p| p.id != id);
        removal_outcome(before, self.patients.len())
    }
}

fn cpf_digits(cpf: &str) -> String {
    cpf.chars().filter(char::is_ascii_digit).collect()
}

fn removal_outcome(before: usize, after: usize) -> RegistryOutcome {
    if after < before {
        RegistryOutcome::Removed
    } else {
        RegistryOutcome::NotFound
    }
}
