// src/engine/dispatch.rs

//! The queue dispatch engine.
//!
//! [`DispatchEngine`] is the single owner of every piece of front-desk state:
//! ticket numbering, the two waiting lines, ticket details, desk serving
//! slots, the current call and the call history. All mutation goes through
//! its action methods, each of which runs to completion before the next one
//! starts.
//!
//! Caller-contract problems (unknown desk, nothing to call) are reported as
//! outcome values and always leave the state untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::engine::history::{CallHistory, CallRecord};
use crate::engine::queue::{TicketKind, TicketQueues};
use crate::registry::{
    Collaborator, Desk, NewCollaborator, NewPatient, Patient, Registry, RegistryOutcome,
};
use crate::types::{CollaboratorId, DeskName, PatientId, TicketId};

/// What the engine remembers about an issued ticket.
///
/// Written once at issuance and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDetail {
    /// Registered patient the ticket was issued for; `None` for walk-ups.
    pub patient: Option<Patient>,
    pub is_priority: bool,
}

/// Result of [`DispatchEngine::call_next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// A ticket was popped and assigned to the desk.
    Called(CallRecord),
    /// No desk with that name exists; nothing was popped.
    DeskNotFound,
    /// Both lines are empty.
    QueuesEmpty,
}

/// Result of [`DispatchEngine::finish_serving`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The desk's slot is now empty; `ticket` is what it held before.
    Finished { ticket: Option<TicketId> },
    DeskNotFound,
}

#[derive(Debug)]
pub struct DispatchEngine {
    registry: Registry,
    queues: TicketQueues,
    last_ticket: u64,
    details: BTreeMap<TicketId, TicketDetail>,
    /// One slot per registered desk.
    serving: BTreeMap<DeskName, Option<TicketId>>,
    current_call: Option<CallRecord>,
    history: CallHistory,
}

impl DispatchEngine {
    /// Create an empty engine keeping at most `history_limit` calls.
    pub fn new(history_limit: usize) -> Self {
        Self {
            registry: Registry::new(),
            queues: TicketQueues::new(),
            last_ticket: 0,
            details: BTreeMap::new(),
            serving: BTreeMap::new(),
            current_call: None,
            history: CallHistory::new(history_limit),
        }
    }

    /// Build an engine seeded with the desks, collaborators and patients
    /// declared in the config file.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let mut engine = Self::new(cfg.config.history_limit);

        for desk in &cfg.desk {
            engine.add_desk(desk.clone());
        }
        for collaborator in &cfg.collaborator {
            engine.add_collaborator(collaborator.clone());
        }
        for patient in &cfg.patient {
            engine.add_patient(patient.clone());
        }

        info!(
            desks = engine.registry.desks().len(),
            collaborators = engine.registry.collaborators().len(),
            patients = engine.registry.patients().len(),
            history_limit = engine.history.limit(),
            "dispatch engine initialised"
        );
        engine
    }

    // --- Tickets -----------------------------------------------------------

    /// Issue a ticket in the normal line.
    pub fn issue_ticket(&mut self, patient: Option<Patient>) -> TicketId {
        self.issue(patient, TicketKind::Normal)
    }

    /// Issue a ticket in the priority line.
    ///
    /// Whether the holder is entitled to priority is the caller's decision;
    /// the engine only records the flag.
    pub fn issue_priority_ticket(&mut self, patient: Option<Patient>) -> TicketId {
        self.issue(patient, TicketKind::Priority)
    }

    fn issue(&mut self, patient: Option<Patient>, kind: TicketKind) -> TicketId {
        self.last_ticket += 1;
        let ticket = TicketId(self.last_ticket);

        self.queues.enqueue(ticket, kind);
        self.details.insert(
            ticket,
            TicketDetail {
                patient,
                is_priority: kind.is_priority(),
            },
        );

        info!(%ticket, ?kind, waiting = self.queues.len(), "ticket issued");
        ticket
    }

    // --- Calls -------------------------------------------------------------

    /// Call the next waiting ticket to `desk_name`, stamped with the current
    /// wall-clock time.
    pub fn call_next(&mut self, desk_name: &str) -> CallOutcome {
        self.call_next_at(desk_name, Utc::now())
    }

    /// Same as [`call_next`](Self::call_next) with an explicit timestamp.
    ///
    /// The desk is resolved before anything is popped, so an unknown desk
    /// never consumes a ticket.
    pub fn call_next_at(&mut self, desk_name: &str, now: DateTime<Utc>) -> CallOutcome {
        let Some(desk) = self.registry.find_desk(desk_name) else {
            debug!(desk = %desk_name, "call requested for unknown desk; ignoring");
            return CallOutcome::DeskNotFound;
        };
        let desk = desk.clone();

        let Some((ticket, kind)) = self.queues.pop_next() else {
            debug!(desk = %desk_name, "call requested with empty queues; ignoring");
            return CallOutcome::QueuesEmpty;
        };

        let call = CallRecord {
            ticket,
            desk: desk.name.clone(),
            attendant: desk.attendant,
            is_priority: kind.is_priority(),
            timestamp: now,
        };

        self.current_call = Some(call.clone());
        self.history.record(call.clone());
        self.serving.insert(desk.name, Some(ticket));

        info!(
            %ticket,
            desk = %call.desk,
            attendant = %call.attendant,
            priority = call.is_priority,
            "ticket called"
        );
        CallOutcome::Called(call)
    }

    /// Clear the serving slot of `desk_name`.
    ///
    /// Queues, history and the current call are left alone.
    pub fn finish_serving(&mut self, desk_name: &str) -> FinishOutcome {
        match self.serving.get_mut(desk_name) {
            Some(slot) => {
                let ticket = slot.take();
                debug!(desk = %desk_name, ?ticket, "service finished");
                FinishOutcome::Finished { ticket }
            }
            None => {
                debug!(desk = %desk_name, "finish requested for unknown desk; ignoring");
                FinishOutcome::DeskNotFound
            }
        }
    }

    // --- Registry ----------------------------------------------------------

    pub fn add_desk(&mut self, desk: Desk) -> RegistryOutcome {
        let name = desk.name.clone();
        let outcome = self.registry.add_desk(desk);
        if outcome == RegistryOutcome::Added {
            self.serving.insert(name, None);
        }
        outcome
    }

    /// Remove a desk together with its serving slot.
    ///
    /// Calls already made for the desk stay in the history as they are.
    pub fn remove_desk(&mut self, name: &str) -> RegistryOutcome {
        let outcome = self.registry.remove_desk(name);
        if outcome == RegistryOutcome::Removed {
            self.serving.remove(name);
        }
        outcome
    }

    /// `None` when the registration is already taken.
    pub fn add_collaborator(&mut self, new: NewCollaborator) -> Option<CollaboratorId> {
        self.registry.add_collaborator(new)
    }

    pub fn remove_collaborator(&mut self, id: CollaboratorId) -> RegistryOutcome {
        self.registry.remove_collaborator(id)
    }

    pub fn add_patient(&mut self, new: NewPatient) -> PatientId {
        self.registry.add_patient(new)
    }

    pub fn remove_patient(&mut self, id: PatientId) -> RegistryOutcome {
        self.registry.remove_patient(id)
    }

    // --- Read-only state ---------------------------------------------------

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn desks(&self) -> &[Desk] {
        self.registry.desks()
    }

    pub fn collaborators(&self) -> &[Collaborator] {
        self.registry.collaborators()
    }

    pub fn patients(&self) -> &[Patient] {
        self.registry.patients()
    }

    /// Waiting normal tickets, front first.
    pub fn normal_queue(&self) -> Vec<TicketId> {
        self.queues.normal().iter().copied().collect()
    }

    /// Waiting priority tickets, front first.
    pub fn priority_queue(&self) -> Vec<TicketId> {
        self.queues.priority().iter().copied().collect()
    }

    pub fn queues(&self) -> &TicketQueues {
        &self.queues
    }

    /// Ticket currently served at `desk_name`; `None` when the slot is empty
    /// or the desk does not exist.
    pub fn serving(&self, desk_name: &str) -> Option<TicketId> {
        self.serving.get(desk_name).copied().flatten()
    }

    pub fn serving_slots(&self) -> &BTreeMap<DeskName, Option<TicketId>> {
        &self.serving
    }

    pub fn current_call(&self) -> Option<&CallRecord> {
        self.current_call.as_ref()
    }

    pub fn history(&self) -> &CallHistory {
        &self.history
    }

    pub fn ticket_detail(&self, ticket: TicketId) -> Option<&TicketDetail> {
        self.details.get(&ticket)
    }

    pub fn ticket_details(&self) -> &BTreeMap<TicketId, TicketDetail> {
        &self.details
    }

    /// The id the next issued ticket will receive.
    pub fn next_ticket(&self) -> TicketId {
        TicketId(self.last_ticket + 1)
    }
}

impl Default for DispatchEngine {
    fn default() -> Self {
        Self::new(crate::engine::history::DEFAULT_HISTORY_LIMIT)
    }
}
