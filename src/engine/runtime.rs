// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::panel::PanelBackend;

use super::core::CoreRuntime;
use super::{CoreCommand, FrontDeskEvent};

/// Drives the dispatch engine in response to `FrontDeskEvent`s, and
/// delegates announcements and notices to a `PanelBackend`.
///
/// This is a pure IO shell around `CoreRuntime`, which contains all the
/// front-desk semantics. Events are processed strictly one at a time, so
/// each action sees the state left by the previous one.
pub struct Runtime<P: PanelBackend> {
    core: CoreRuntime,
    event_rx: mpsc::Receiver<FrontDeskEvent>,
    panel: P,
}

impl<P: PanelBackend> fmt::Debug for Runtime<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<P: PanelBackend> Runtime<P> {
    pub fn new(core: CoreRuntime, event_rx: mpsc::Receiver<FrontDeskEvent>, panel: P) -> Self {
        Self {
            core,
            event_rx,
            panel,
        }
    }

    /// Main event loop.
    ///
    /// - Consumes `FrontDeskEvent`s from `event_rx`.
    /// - Feeds them into the core runtime.
    /// - Executes commands returned by the core (announce, report).
    ///
    /// Returns the core so callers can inspect the final state.
    pub async fn run(mut self) -> Result<CoreRuntime> {
        info!("frontdesk runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            // Feed the event into the pure core and get commands back.
            let step = self.core.step(event);

            for command in step.commands {
                self.execute_command(command).await?;
            }

            if !step.keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(self.core)
    }

    /// Execute a single command from the core.
    async fn execute_command(&mut self, command: CoreCommand) -> Result<()> {
        match command {
            CoreCommand::Announce(call) => {
                debug!(ticket = %call.ticket, desk = %call.desk, "announcing call");
                self.panel.announce(call).await
            }
            CoreCommand::Report(notice) => self.panel.report(notice).await,
        }
    }
}
