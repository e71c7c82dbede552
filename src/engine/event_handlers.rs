// src/engine/event_handlers.rs

//! Event handling logic for the core runtime.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::AccessSection;
use crate::engine::dispatch::{CallOutcome, DispatchEngine, FinishOutcome};
use crate::engine::history::CallRecord;
use crate::kiosk::{self, KioskOutcome};
use crate::registry::{Desk, NewCollaborator, NewPatient, RegistryOutcome};
use crate::session::{self, Session};
use crate::types::{CollaboratorId, DeskName, PatientId, Profile, TicketId};

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum CoreCommand {
    /// A new call was made; the panel must announce it (once).
    Announce(CallRecord),
    /// Tell the console user what happened.
    Report(Notice),
}

/// Decision returned by the core after handling a single `FrontDeskEvent`.
#[derive(Debug, Clone)]
pub struct CoreStep {
    /// Commands the IO shell should execute (announce, report).
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    pub(crate) fn report(notice: Notice) -> Self {
        Self {
            commands: vec![CoreCommand::Report(notice)],
            keep_running: true,
        }
    }
}

/// One desk as shown by `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServingView {
    pub desk: DeskName,
    pub attendant: String,
    pub ticket: Option<TicketId>,
    /// Name of the registered patient holding `ticket`, if any.
    pub patient: Option<String>,
}

/// Read-only picture of the engine for the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub priority: Vec<TicketId>,
    pub normal: Vec<TicketId>,
    pub desks: Vec<ServingView>,
    pub current_call: Option<CallRecord>,
    /// Newest first. An attendant session sees only its own calls.
    pub history: Vec<CallRecord>,
    pub session: Option<String>,
}

impl StatusSnapshot {
    pub fn capture(engine: &DispatchEngine, session: Option<&Session>) -> Self {
        let desks = engine
            .desks()
            .iter()
            .map(|desk| {
                let ticket = engine.serving(&desk.name);
                let patient = ticket
                    .and_then(|t| engine.ticket_detail(t))
                    .and_then(|detail| detail.patient.as_ref())
                    .map(|p| p.full_name());
                ServingView {
                    desk: desk.name.clone(),
                    attendant: desk.attendant.clone(),
                    ticket,
                    patient,
                }
            })
            .collect();

        Self {
            priority: engine.priority_queue(),
            normal: engine.normal_queue(),
            desks,
            current_call: engine.current_call().cloned(),
            history: engine
                .history()
                .iter()
                .filter(|call| match session {
                    Some(Session::Attendant { display_name, .. }) => {
                        &call.attendant == display_name
                    }
                    _ => true,
                })
                .cloned()
                .collect(),
            session: session.map(|s| format!("{} ({})", s.display_name(), s.profile())),
        }
    }
}

/// Outcome of an action, phrased for the console user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TicketIssued {
        ticket: TicketId,
        priority: bool,
        patient: Option<String>,
    },
    UnknownCpf,
    Called {
        ticket: TicketId,
        desk: DeskName,
    },
    NothingToCall {
        desk: DeskName,
    },
    DeskNotFound {
        desk: DeskName,
    },
    /// No desk given and the session has none to fall back on.
    NoDeskSelected,
    Finished {
        desk: DeskName,
        ticket: Option<TicketId>,
    },
    DeskAdded {
        desk: DeskName,
    },
    DuplicateDesk {
        desk: DeskName,
    },
    DeskRemoved {
        desk: DeskName,
    },
    CollaboratorAdded {
        id: CollaboratorId,
    },
    CollaboratorRemoved {
        id: CollaboratorId,
    },
    CollaboratorNotFound {
        id: CollaboratorId,
    },
    DuplicateRegistration {
        registration: String,
    },
    PatientAdded {
        id: PatientId,
    },
    PatientRemoved {
        id: PatientId,
    },
    PatientNotFound {
        id: PatientId,
    },
    LoggedIn {
        name: String,
        profile: Profile,
        desk: Option<DeskName>,
    },
    LoginFailed,
    LoggedOut,
    Status(StatusSnapshot),
    Goodbye,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::TicketIssued {
                ticket,
                priority,
                patient,
            } => {
                let kind = if *priority { "priority ticket" } else { "ticket" };
                match patient {
                    Some(name) => write!(f, "Hello {name}! Your {kind} number {ticket} was issued."),
                    None => write!(f, "Walk-up {kind} number {ticket} issued."),
                }
            }
            Notice::UnknownCpf => {
                write!(f, "CPF not found. Take a walk-up ticket with `ticket` or `priority`.")
            }
            Notice::Called { ticket, desk } => write!(f, "Ticket {ticket} called to {desk}."),
            Notice::NothingToCall { desk } => write!(f, "No tickets waiting for {desk}."),
            Notice::DeskNotFound { desk } => write!(f, "No desk named '{desk}'."),
            Notice::NoDeskSelected => {
                write!(f, "Name a desk, or log in as an attendant who staffs one.")
            }
            Notice::Finished { desk, ticket } => match ticket {
                Some(t) => write!(f, "{desk} finished serving ticket {t}."),
                None => write!(f, "{desk} was not serving anyone."),
            },
            Notice::DeskAdded { desk } => write!(f, "Desk '{desk}' added."),
            Notice::DuplicateDesk { desk } => write!(f, "Desk '{desk}' already exists."),
            Notice::DeskRemoved { desk } => write!(f, "Desk '{desk}' removed."),
            Notice::CollaboratorAdded { id } => write!(f, "Collaborator {id} added."),
            Notice::CollaboratorRemoved { id } => write!(f, "Collaborator {id} removed."),
            Notice::CollaboratorNotFound { id } => write!(f, "No collaborator with id {id}."),
            Notice::DuplicateRegistration { registration } => {
                write!(f, "Registration '{registration}' is already in use.")
            }
            Notice::PatientAdded { id } => write!(f, "Patient {id} added."),
            Notice::PatientRemoved { id } => write!(f, "Patient {id} removed."),
            Notice::PatientNotFound { id } => write!(f, "No patient with id {id}."),
            Notice::LoggedIn {
                name,
                profile,
                desk,
            } => {
                write!(f, "Logged in as {name} ({profile})")?;
                if let Some(desk) = desk {
                    write!(f, " at {desk}")?;
                }
                write!(f, ".")
            }
            Notice::LoginFailed => write!(f, "Invalid user or password."),
            Notice::LoggedOut => write!(f, "Logged out."),
            Notice::Status(status) => write_status(f, status),
            Notice::Goodbye => write!(f, "Bye."),
        }
    }
}

fn write_status(f: &mut fmt::Formatter<'_>, status: &StatusSnapshot) -> fmt::Result {
    if let Some(session) = &status.session {
        writeln!(f, "session: {session}")?;
    }
    writeln!(f, "priority queue: {}", join_tickets(&status.priority))?;
    writeln!(f, "normal queue:   {}", join_tickets(&status.normal))?;
    writeln!(f, "desks:")?;
    for view in &status.desks {
        write!(f, "  {} ({}): ", view.desk, view.attendant)?;
        match (view.ticket, &view.patient) {
            (Some(t), Some(p)) => writeln!(f, "serving {t} ({p})")?,
            (Some(t), None) => writeln!(f, "serving {t}")?,
            (None, _) => writeln!(f, "free")?,
        }
    }
    match &status.current_call {
        Some(call) => writeln!(f, "current call: {call}")?,
        None => writeln!(f, "current call: -")?,
    }
    write!(f, "history:")?;
    for call in &status.history {
        write!(f, "\n  {call}")?;
    }
    Ok(())
}

fn join_tickets(tickets: &[TicketId]) -> String {
    if tickets.is_empty() {
        return "-".to_string();
    }
    tickets
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Handle a walk-up ticket request.
pub fn handle_issue_ticket(engine: &mut DispatchEngine, priority: bool) -> CoreStep {
    let ticket = if priority {
        engine.issue_priority_ticket(None)
    } else {
        engine.issue_ticket(None)
    };

    CoreStep::report(Notice::TicketIssued {
        ticket,
        priority,
        patient: None,
    })
}

/// Handle a kiosk request from a registered patient.
pub fn handle_issue_for_cpf(
    engine: &mut DispatchEngine,
    cpf: &str,
    today: NaiveDate,
    priority_age: u32,
) -> CoreStep {
    match kiosk::issue_for_cpf(engine, cpf, today, priority_age) {
        KioskOutcome::Issued {
            ticket,
            patient,
            priority,
        } => CoreStep::report(Notice::TicketIssued {
            ticket,
            priority,
            patient: Some(patient.first_name),
        }),
        KioskOutcome::UnknownCpf => CoreStep::report(Notice::UnknownCpf),
    }
}

/// Handle a call request.
///
/// - With an explicit desk, call the next ticket to it.
/// - Without one, use the logged-in attendant's desk. When that desk is
///   serving someone and nobody is waiting, the request finishes the current
///   service instead, like the dedicated attendant screen's single button.
pub fn handle_call_next(
    engine: &mut DispatchEngine,
    session: Option<&Session>,
    desk: Option<String>,
) -> CoreStep {
    let desk_name = match desk {
        Some(name) => name,
        None => {
            let Some(name) = session_desk(engine, session) else {
                return CoreStep::report(Notice::NoDeskSelected);
            };
            if engine.queues().is_empty() && engine.serving(&name).is_some() {
                debug!(desk = %name, "queues empty; attendant next finishes service");
                return handle_finish_serving(engine, session, Some(name));
            }
            name
        }
    };

    match engine.call_next(&desk_name) {
        CallOutcome::Called(call) => {
            let notice = Notice::Called {
                ticket: call.ticket,
                desk: call.desk.clone(),
            };
            CoreStep {
                commands: vec![CoreCommand::Announce(call), CoreCommand::Report(notice)],
                keep_running: true,
            }
        }
        CallOutcome::DeskNotFound => {
            warn!(desk = %desk_name, "call for unknown desk");
            CoreStep::report(Notice::DeskNotFound { desk: desk_name })
        }
        CallOutcome::QueuesEmpty => CoreStep::report(Notice::NothingToCall { desk: desk_name }),
    }
}

/// Handle a finish request for a desk (or the session's desk).
pub fn handle_finish_serving(
    engine: &mut DispatchEngine,
    session: Option<&Session>,
    desk: Option<String>,
) -> CoreStep {
    let Some(desk_name) = desk.or_else(|| session_desk(engine, session)) else {
        return CoreStep::report(Notice::NoDeskSelected);
    };

    match engine.finish_serving(&desk_name) {
        FinishOutcome::Finished { ticket } => CoreStep::report(Notice::Finished {
            desk: desk_name,
            ticket,
        }),
        FinishOutcome::DeskNotFound => CoreStep::report(Notice::DeskNotFound { desk: desk_name }),
    }
}

pub fn handle_add_desk(engine: &mut DispatchEngine, desk: Desk) -> CoreStep {
    let name = desk.name.clone();
    match engine.add_desk(desk) {
        RegistryOutcome::Duplicate => CoreStep::report(Notice::DuplicateDesk { desk: name }),
        _ => CoreStep::report(Notice::DeskAdded { desk: name }),
    }
}

pub fn handle_remove_desk(engine: &mut DispatchEngine, name: String) -> CoreStep {
    match engine.remove_desk(&name) {
        RegistryOutcome::Removed => CoreStep::report(Notice::DeskRemoved { desk: name }),
        _ => CoreStep::report(Notice::DeskNotFound { desk: name }),
    }
}

pub fn handle_add_collaborator(engine: &mut DispatchEngine, new: NewCollaborator) -> CoreStep {
    let registration = new.registration.clone();
    match engine.add_collaborator(new) {
        Some(id) => CoreStep::report(Notice::CollaboratorAdded { id }),
        None => CoreStep::report(Notice::DuplicateRegistration { registration }),
    }
}

pub fn handle_remove_collaborator(engine: &mut DispatchEngine, id: CollaboratorId) -> CoreStep {
    match engine.remove_collaborator(id) {
        RegistryOutcome::Removed => CoreStep::report(Notice::CollaboratorRemoved { id }),
        _ => CoreStep::report(Notice::CollaboratorNotFound { id }),
    }
}

pub fn handle_add_patient(engine: &mut DispatchEngine, new: NewPatient) -> CoreStep {
    let id = engine.add_patient(new);
    CoreStep::report(Notice::PatientAdded { id })
}

pub fn handle_remove_patient(engine: &mut DispatchEngine, id: PatientId) -> CoreStep {
    match engine.remove_patient(id) {
        RegistryOutcome::Removed => CoreStep::report(Notice::PatientRemoved { id }),
        _ => CoreStep::report(Notice::PatientNotFound { id }),
    }
}

/// Handle a login attempt, replacing any previous session on success.
pub fn handle_login(
    engine: &DispatchEngine,
    access: &AccessSection,
    session: &mut Option<Session>,
    user: &str,
    password: &str,
) -> CoreStep {
    match session::authenticate(access, engine.collaborators(), user, password) {
        Some(new_session) => {
            let desk = new_session.desk(engine).map(|d| d.name.clone());
            info!(user = %user, profile = %new_session.profile(), ?desk, "login succeeded");
            let notice = Notice::LoggedIn {
                name: new_session.display_name().to_string(),
                profile: new_session.profile(),
                desk,
            };
            *session = Some(new_session);
            CoreStep::report(notice)
        }
        None => {
            warn!(user = %user, "login failed");
            CoreStep::report(Notice::LoginFailed)
        }
    }
}

fn session_desk(engine: &DispatchEngine, session: Option<&Session>) -> Option<DeskName> {
    session
        .and_then(|s| s.desk(engine))
        .map(|desk| desk.name.clone())
}
