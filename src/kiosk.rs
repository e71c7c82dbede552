// src/kiosk.rs

//! Patient self-service ticket issuance.
//!
//! A registered patient types their CPF at the kiosk. The kiosk, not the
//! engine, decides whether the patient is entitled to the priority line.

use chrono::NaiveDate;
use tracing::info;

use crate::engine::DispatchEngine;
use crate::registry::Patient;
use crate::types::TicketId;

/// Result of [`issue_for_cpf`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskOutcome {
    Issued {
        ticket: TicketId,
        patient: Patient,
        priority: bool,
    },
    /// No registered patient has this CPF; no ticket was issued.
    UnknownCpf,
}

/// Whether someone born on `dob` is at least `threshold_years` old on `today`.
pub fn is_priority_age(dob: NaiveDate, today: NaiveDate, threshold_years: u32) -> bool {
    match today.years_since(dob) {
        Some(age) => age >= threshold_years,
        None => false,
    }
}

/// Look up the patient by CPF and issue a ticket linked to them, in the
/// priority line when they meet the age threshold.
pub fn issue_for_cpf(
    engine: &mut DispatchEngine,
    cpf: &str,
    today: NaiveDate,
    threshold_years: u32,
) -> KioskOutcome {
    let Some(patient) = engine.registry().find_patient_by_cpf(cpf).cloned() else {
        info!("kiosk lookup found no patient for the given CPF");
        return KioskOutcome::UnknownCpf;
    };

    let priority = is_priority_age(patient.dob, today, threshold_years);
    let ticket = if priority {
        engine.issue_priority_ticket(Some(patient.clone()))
    } else {
        engine.issue_ticket(Some(patient.clone()))
    };

    KioskOutcome::Issued {
        ticket,
        patient,
        priority,
    }
}
