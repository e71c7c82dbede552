// tests/runtime_recording_panel.rs

use std::error::Error;
use std::sync::{Arc, Mutex};

use frontdesk::engine::{CoreRuntime, FrontDeskEvent, Notice, Runtime};
use frontdesk::types::TicketId;
use frontdesk_test_utils::builders::ConfigFileBuilder;
use frontdesk_test_utils::fake_panel::{PanelLog, RecordingPanel};
use frontdesk_test_utils::{init_tracing, with_timeout};
use tokio::sync::mpsc;

type TestResult = Result<(), Box<dyn Error>>;

fn call(desk: &str) -> FrontDeskEvent {
    FrontDeskEvent::CallNext {
        desk: Some(desk.to_string()),
    }
}

#[tokio::test]
async fn runtime_announces_every_call_and_stops_on_shutdown() -> TestResult {
    init_tracing();

    let cfg = ConfigFileBuilder::new()
        .with_desk("A", "Ana")
        .with_desk("B", "Beto")
        .build();
    let log = Arc::new(Mutex::new(PanelLog::default()));
    let (tx, rx) = mpsc::channel(16);
    let runtime = Runtime::new(
        CoreRuntime::from_config(&cfg),
        rx,
        RecordingPanel::new(Arc::clone(&log)),
    );
    let handle = tokio::spawn(runtime.run());

    for event in [
        FrontDeskEvent::IssueTicket { priority: false },
        FrontDeskEvent::IssueTicket { priority: true },
        FrontDeskEvent::IssueTicket { priority: false },
        call("A"),
        call("B"),
        call("Z"),
        call("A"),
        call("B"),
        FrontDeskEvent::ShutdownRequested,
    ] {
        tx.send(event).await?;
    }

    let core = with_timeout(handle).await??;

    let log = log.lock().unwrap();
    let called: Vec<(TicketId, &str)> = log
        .announcements
        .iter()
        .map(|c| (c.ticket, c.desk.as_str()))
        .collect();
    assert_eq!(
        called,
        vec![(TicketId(2), "A"), (TicketId(1), "B"), (TicketId(3), "A")]
    );
    assert_eq!(log.notices.last(), Some(&Notice::Goodbye));
    assert!(log
        .notices
        .iter()
        .any(|n| matches!(n, Notice::DeskNotFound { desk } if desk == "Z")));
    assert!(log
        .notices
        .iter()
        .any(|n| matches!(n, Notice::NothingToCall { desk } if desk == "B")));

    assert_eq!(core.engine().next_ticket(), TicketId(4));
    assert_eq!(core.engine().serving("A"), Some(TicketId(3)));
    assert_eq!(core.engine().serving("B"), Some(TicketId(1)));
    assert_eq!(
        core.engine().current_call().map(|c| c.ticket),
        Some(TicketId(3))
    );

    Ok(())
}

#[tokio::test]
async fn runtime_exits_when_all_senders_are_dropped() -> TestResult {
    init_tracing();

    let log = Arc::new(Mutex::new(PanelLog::default()));
    let (tx, rx) = mpsc::channel(4);
    let runtime = Runtime::new(
        CoreRuntime::from_config(&ConfigFileBuilder::new().build()),
        rx,
        RecordingPanel::new(Arc::clone(&log)),
    );

    tx.send(FrontDeskEvent::IssueTicket { priority: false })
        .await?;
    drop(tx);

    let core = with_timeout(runtime.run()).await?;
    assert_eq!(core.engine().normal_queue(), vec![TicketId(1)]);
    assert!(log.lock().unwrap().announcements.is_empty());

    Ok(())
}
