// src/engine/mod.rs

//! Queue dispatch engine for frontdesk.
//!
//! This module ties together:
//! - the two ticket lines ([`queue`]) and the bounded call history
//!   ([`history`])
//! - the dispatch engine that owns all front-desk state ([`dispatch`])
//! - the main runtime event loop that reacts to console actions and shutdown
//!   signals
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use crate::registry::{Desk, NewCollaborator, NewPatient};
use crate::types::{CollaboratorId, PatientId};

/// Events flowing into the runtime from the console and signal handlers.
#[derive(Debug, Clone)]
pub enum FrontDeskEvent {
    AddDesk(Desk),
    RemoveDesk { name: String },
    AddCollaborator(NewCollaborator),
    RemoveCollaborator { id: CollaboratorId },
    AddPatient(NewPatient),
    RemovePatient { id: PatientId },
    /// Walk-up ticket, not linked to a patient.
    IssueTicket { priority: bool },
    /// Kiosk issuance for a registered patient.
    IssueForCpf { cpf: String },
    /// `desk: None` means the logged-in attendant's desk.
    CallNext { desk: Option<String> },
    /// `desk: None` means the logged-in attendant's desk.
    FinishServing { desk: Option<String> },
    Login { user: String, password: String },
    Logout,
    ShowStatus,
    /// Graceful shutdown requested (end of input, Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod dispatch;
pub mod event_handlers;
pub mod history;
pub mod queue;
pub mod runtime;

pub use core::{CoreOptions, CoreRuntime};
pub use dispatch::{CallOutcome, DispatchEngine, FinishOutcome, TicketDetail};
pub use event_handlers::{CoreCommand, CoreStep, Notice, ServingView, StatusSnapshot};
pub use history::{CallHistory, CallRecord, DEFAULT_HISTORY_LIMIT};
pub use queue::{TicketKind, TicketQueues};
pub use runtime::Runtime;
