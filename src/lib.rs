// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod engine;
pub mod errors;
pub mod kiosk;
pub mod logging;
pub mod panel;
pub mod registry;
pub mod session;
pub mod types;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{load_or_default, ConfigFile};
use crate::engine::{CoreRuntime, FrontDeskEvent, Runtime};
use crate::errors::Result;
use crate::panel::ConsolePanel;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - dispatch engine / core runtime
/// - display panel
/// - console reader
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<FrontDeskEvent>(64);

    let panel = ConsolePanel::new(cfg.panel.speech_command.clone());

    // Detached: a pending stdin read must not hold up exit.
    let _console = console::spawn_console(rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for Ctrl+C");
                return;
            }
            let _ = tx.send(FrontDeskEvent::ShutdownRequested).await;
        });
    }

    println!("frontdesk ready; type `help` for commands.");

    // Construct the pure core runtime (single owner of all queue state).
    let core = CoreRuntime::from_config(&cfg);

    // Construct the async IO shell around the core.
    let runtime = Runtime::new(core, rt_rx, panel);
    let core = runtime.run().await?;

    info!(
        issued = core.engine().ticket_details().len(),
        waiting = core.engine().queues().len(),
        "session ended"
    );
    Ok(())
}

/// Simple dry-run output: print limits, accounts and registries.
fn print_dry_run(cfg: &ConfigFile) {
    println!("frontdesk dry-run");
    println!("  config.history_limit = {}", cfg.config.history_limit);
    println!("  config.priority_age = {}", cfg.config.priority_age);
    println!("  access.admin_user = {}", cfg.access.admin_user);
    println!("  access.panel_user = {}", cfg.access.panel_user);
    match &cfg.panel.speech_command {
        Some(cmd) => println!("  panel.speech_command = {:?}", cmd),
        None => println!("  panel.speech_command = (none)"),
    }
    println!();

    println!("desks ({}):", cfg.desk.len());
    for desk in cfg.desk.iter() {
        println!("  - {} (attendant: {})", desk.name, desk.attendant);
    }

    println!("collaborators ({}):", cfg.collaborator.len());
    for c in cfg.collaborator.iter() {
        println!(
            "  - {} {} [{}] profile={}",
            c.first_name, c.last_name, c.registration, c.profile
        );
    }

    println!("patients ({}):", cfg.patient.len());
    for p in cfg.patient.iter() {
        println!("  - {} {} cpf={} dob={}", p.first_name, p.last_name, p.cpf, p.dob);
    }

    debug!("dry-run complete (no console)");
}
