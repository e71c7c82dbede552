// src/engine/core.rs

//! Pure core runtime state machine.
//!
//! This module contains a synchronous, deterministic "core runtime" that
//! consumes [`FrontDeskEvent`]s and produces:
//! - an updated core state
//! - a list of "commands" describing what the IO shell should do next
//!
//! The async/IO-heavy shell (`engine::runtime::Runtime`) is responsible for:
//! - reading events from channels
//! - handing announcements and notices to the panel backend
//! - handling Ctrl+C / shutdown
//!
//! The core is intended to be extensively unit tested without any Tokio,
//! channels, terminals, or processes.

use chrono::{Local, NaiveDate};

use crate::config::{AccessSection, ConfigFile};
use crate::engine::dispatch::DispatchEngine;
use crate::engine::event_handlers::{
    handle_add_collaborator, handle_add_desk, handle_add_patient, handle_call_next,
    handle_finish_serving, handle_issue_for_cpf, handle_issue_ticket, handle_login,
    handle_remove_collaborator, handle_remove_desk, handle_remove_patient, CoreCommand, CoreStep,
    Notice, StatusSnapshot,
};
use crate::engine::FrontDeskEvent;
use crate::session::Session;

/// Settings the core needs besides the engine itself.
#[derive(Debug, Clone)]
pub struct CoreOptions {
    pub access: AccessSection,
    /// Kiosk priority threshold in years.
    pub priority_age: u32,
    /// Pin the kiosk's calendar date; `None` uses the local date.
    pub today: Option<NaiveDate>,
}

impl CoreOptions {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            access: cfg.access.clone(),
            priority_age: cfg.config.priority_age,
            today: None,
        }
    }
}

/// Pure core runtime state.
///
/// This owns:
/// - the dispatch engine (queues, desks, history, registries)
/// - the console session
/// - core options
///
/// It has **no** channels, no Tokio types, and does not perform any IO.
#[derive(Debug)]
pub struct CoreRuntime {
    engine: DispatchEngine,
    session: Option<Session>,
    options: CoreOptions,
}

impl CoreRuntime {
    pub fn new(engine: DispatchEngine, options: CoreOptions) -> Self {
        Self {
            engine,
            session: None,
            options,
        }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::new(DispatchEngine::from_config(cfg), CoreOptions::from_config(cfg))
    }

    /// Read access to the engine (for tests and status rendering).
    pub fn engine(&self) -> &DispatchEngine {
        &self.engine
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn today(&self) -> NaiveDate {
        self.options
            .today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Handle a single event, updating core state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: FrontDeskEvent) -> CoreStep {
        match event {
            FrontDeskEvent::AddDesk(desk) => handle_add_desk(&mut self.engine, desk),
            FrontDeskEvent::RemoveDesk { name } => handle_remove_desk(&mut self.engine, name),
            FrontDeskEvent::AddCollaborator(new) => {
                handle_add_collaborator(&mut self.engine, new)
            }
            FrontDeskEvent::RemoveCollaborator { id } => {
                handle_remove_collaborator(&mut self.engine, id)
            }
            FrontDeskEvent::AddPatient(new) => handle_add_patient(&mut self.engine, new),
            FrontDeskEvent::RemovePatient { id } => handle_remove_patient(&mut self.engine, id),
            FrontDeskEvent::IssueTicket { priority } => {
                handle_issue_ticket(&mut self.engine, priority)
            }
            FrontDeskEvent::IssueForCpf { cpf } => {
                let today = self.today();
                handle_issue_for_cpf(&mut self.engine, &cpf, today, self.options.priority_age)
            }
            FrontDeskEvent::CallNext { desk } => {
                handle_call_next(&mut self.engine, self.session.as_ref(), desk)
            }
            FrontDeskEvent::FinishServing { desk } => {
                handle_finish_serving(&mut self.engine, self.session.as_ref(), desk)
            }
            FrontDeskEvent::Login { user, password } => handle_login(
                &self.engine,
                &self.options.access,
                &mut self.session,
                &user,
                &password,
            ),
            FrontDeskEvent::Logout => {
                self.session = None;
                CoreStep::report(Notice::LoggedOut)
            }
            FrontDeskEvent::ShowStatus => CoreStep::report(Notice::Status(StatusSnapshot::capture(
                &self.engine,
                self.session.as_ref(),
            ))),
            FrontDeskEvent::ShutdownRequested => CoreStep {
                commands: vec![CoreCommand::Report(Notice::Goodbye)],
                keep_running: false,
            },
        }
    }
}
