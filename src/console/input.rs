// src/console/input.rs

//! Stdin reader thread.

use std::io::{self, BufRead, Write};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::FrontDeskEvent;

use super::parser::{parse_line, ConsoleLine, HELP};

/// Spawn the console reader on its own OS thread.
///
/// A stdin read blocks until the user presses Enter. On a plain thread that
/// read never keeps the Tokio runtime alive, so Ctrl-C ends the process even
/// while the console is waiting for input.
pub fn spawn_console(runtime_tx: mpsc::Sender<FrontDeskEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("console".to_string())
        .spawn(move || {
            info!("console reader started");
            let stdin = io::stdin();
            forward_lines(stdin.lock(), io::stderr(), &runtime_tx);
            info!("console reader finished");
        })
}

/// Parse every line from `input` and forward events to the runtime.
///
/// Parse errors and `help` are answered on `replies` without involving the
/// runtime. `quit` stops reading; end of input sends `ShutdownRequested`.
/// Must run outside the async runtime (it uses `blocking_send`).
pub fn forward_lines<R, W>(input: R, mut replies: W, runtime_tx: &mpsc::Sender<FrontDeskEvent>)
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "failed to read console input");
                break;
            }
        };

        let reply = match parse_line(&line) {
            Ok(ConsoleLine::Event(event)) => {
                let quitting = matches!(event, FrontDeskEvent::ShutdownRequested);
                if runtime_tx.blocking_send(event).is_err() {
                    debug!("runtime gone; console reader stopping");
                    return;
                }
                if quitting {
                    return;
                }
                continue;
            }
            Ok(ConsoleLine::Help) => format!("{HELP}\n"),
            Ok(ConsoleLine::Blank) => continue,
            Err(err) => format!("error: {err}\n"),
        };

        if let Err(err) = replies.write_all(reply.as_bytes()) {
            warn!(error = %err, "failed to write console reply");
        }
    }

    debug!("stdin closed");
    let _ = runtime_tx.blocking_send(FrontDeskEvent::ShutdownRequested);
}
