// src/panel/backend.rs

//! Pluggable panel backend abstraction.
//!
//! The runtime talks to a `PanelBackend` instead of writing to the terminal
//! directly. Production uses [`ConsolePanel`]; tests can provide their own
//! implementation that records what was announced.

use std::future::Future;
use std::pin::Pin;

use tokio::io::{AsyncWriteExt, Stdout};
use tracing::info;

use crate::engine::{CallRecord, Notice};
use crate::errors::Result;

use super::speech::spawn_speech;

/// Trait abstracting how calls are announced and outcomes shown.
pub trait PanelBackend: Send {
    /// Announce a new call. Called exactly once per call.
    fn announce(
        &mut self,
        call: CallRecord,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Show the outcome of an action to the console user.
    fn report(&mut self, notice: Notice) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Panel that prints to stdout and optionally speaks announcements through an
/// external program.
pub struct ConsolePanel {
    out: Stdout,
    speech_command: Option<Vec<String>>,
}

impl ConsolePanel {
    pub fn new(speech_command: Option<Vec<String>>) -> Self {
        Self {
            out: tokio::io::stdout(),
            speech_command,
        }
    }
}

impl PanelBackend for ConsolePanel {
    fn announce(
        &mut self,
        call: CallRecord,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let phrase = call.announcement();
            let banner = format!(
                "\n*** {}{} ***\n",
                phrase,
                if call.is_priority { " (priority)" } else { "" }
            );
            self.out.write_all(banner.as_bytes()).await?;
            self.out.flush().await?;

            if let Some(cmd) = &self.speech_command {
                info!(ticket = %call.ticket, "speaking announcement");
                spawn_speech(cmd, &phrase);
            }
            Ok(())
        })
    }

    fn report(&mut self, notice: Notice) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let line = format!("{notice}\n");
            self.out.write_all(line.as_bytes()).await?;
            self.out.flush().await?;
            Ok(())
        })
    }
}
