// src/panel/speech.rs

//! External speech command runner.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, error, info, warn};

/// Speak `phrase` by running `cmd` with the phrase appended as the last
/// argument.
///
/// The process runs in its own Tokio task; the event loop never waits on it.
/// Failures are only logged.
pub fn spawn_speech(cmd: &[String], phrase: &str) {
    let cmd = cmd.to_vec();
    let phrase = phrase.to_string();

    tokio::spawn(async move {
        if let Err(err) = run_speech(&cmd, &phrase).await {
            error!(error = %err, "speech command failed");
        }
    });
}

async fn run_speech(cmd: &[String], phrase: &str) -> Result<()> {
    let Some((program, args)) = cmd.split_first() else {
        warn!("empty speech command; skipping announcement");
        return Ok(());
    };

    debug!(%program, ?args, "starting speech process");

    let mut child = Command::new(program)
        .args(args)
        .arg(phrase)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("spawning speech command '{program}'"))?;

    // Always consume stderr so buffers don't fill; log at debug.
    if let Some(stderr) = child.stderr.take() {
        let program = program.clone();
        tokio::spawn(async move {
            let reader = BufReader::new(stderr);
            let mut lines = reader.lines();

            while let Ok(Some(line)) = lines.next_line().await {
                debug!(%program, "stderr: {}", line);
            }
        });
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for speech command '{program}'"))?;

    if status.success() {
        info!(%program, "announcement spoken");
    } else {
        warn!(%program, exit_code = status.code().unwrap_or(-1), "speech command exited with failure");
    }
    Ok(())
}
