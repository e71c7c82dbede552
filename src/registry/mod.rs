// src/registry/mod.rs

//! Desk, collaborator and patient registries.
//!
//! - [`records`] defines the record types and their "new" (id-less) forms.
//! - [`store`] holds the collections and hands out fresh ids.
//!
//! Registry edits carry no queue invariants: removing a desk, collaborator or
//! patient never touches queued tickets or call history.

pub mod records;
pub mod store;

pub use records::{Collaborator, Desk, NewCollaborator, NewPatient, Patient};
pub use store::{Registry, RegistryOutcome};
