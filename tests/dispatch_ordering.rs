// tests/dispatch_ordering.rs

use std::error::Error;

use frontdesk::engine::{CallOutcome, DispatchEngine};
use frontdesk::types::TicketId;
use frontdesk_test_utils::builders::{engine_with_desks, patient};

type TestResult = Result<(), Box<dyn Error>>;

fn called_ticket(outcome: CallOutcome) -> TicketId {
    match outcome {
        CallOutcome::Called(call) => call.ticket,
        other => panic!("expected a call, got {other:?}"),
    }
}

#[test]
fn ticket_ids_start_at_one_and_are_shared_across_queues() -> TestResult {
    let mut engine = DispatchEngine::default();

    assert_eq!(engine.next_ticket(), TicketId(1));
    assert_eq!(engine.issue_ticket(None), TicketId(1));
    assert_eq!(engine.issue_priority_ticket(None), TicketId(2));
    assert_eq!(engine.issue_ticket(None), TicketId(3));
    assert_eq!(engine.next_ticket(), TicketId(4));

    assert_eq!(engine.normal_queue(), vec![TicketId(1), TicketId(3)]);
    assert_eq!(engine.priority_queue(), vec![TicketId(2)]);

    Ok(())
}

#[test]
fn priority_ticket_is_called_before_earlier_normal_tickets() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);

    engine.issue_ticket(None);
    engine.issue_ticket(None);
    engine.issue_ticket(None);
    engine.issue_priority_ticket(None);

    let order: Vec<TicketId> = (0..4).map(|_| called_ticket(engine.call_next("A"))).collect();
    assert_eq!(order, vec![TicketId(4), TicketId(1), TicketId(2), TicketId(3)]);

    assert!(engine.queues().is_empty());
    Ok(())
}

#[test]
fn interleaved_priority_issuance_still_drains_priority_first() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);

    engine.issue_ticket(None); // 1
    engine.issue_priority_ticket(None); // 2
    engine.issue_ticket(None); // 3
    engine.issue_priority_ticket(None); // 4

    let order: Vec<TicketId> = (0..4).map(|_| called_ticket(engine.call_next("A"))).collect();
    assert_eq!(order, vec![TicketId(2), TicketId(4), TicketId(1), TicketId(3)]);

    Ok(())
}

#[test]
fn called_ticket_leaves_its_queue_and_fills_the_desk_slot() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);
    engine.issue_ticket(None);
    engine.issue_priority_ticket(None);

    let outcome = engine.call_next("A");
    let CallOutcome::Called(call) = outcome else {
        panic!("expected a call, got {outcome:?}");
    };

    assert_eq!(call.ticket, TicketId(2));
    assert!(call.is_priority);
    assert_eq!(call.desk, "A");
    assert_eq!(call.attendant, "Attendant A");
    assert!(!engine.queues().contains(TicketId(2)));
    assert_eq!(engine.serving("A"), Some(TicketId(2)));
    assert_eq!(engine.current_call(), Some(&call));

    Ok(())
}

#[test]
fn calling_with_empty_queues_changes_nothing() -> TestResult {
    let mut engine = engine_with_desks(&["A", "B"]);

    engine.issue_ticket(None);
    engine.call_next("B");

    let slots_before = engine.serving_slots().clone();
    let current_before = engine.current_call().cloned();
    let history_len = engine.history().len();

    assert_eq!(engine.call_next("A"), CallOutcome::QueuesEmpty);

    assert!(engine.normal_queue().is_empty());
    assert!(engine.priority_queue().is_empty());
    assert_eq!(engine.serving_slots(), &slots_before);
    assert_eq!(engine.current_call().cloned(), current_before);
    assert_eq!(engine.history().len(), history_len);
    assert_eq!(engine.serving("A"), None);

    Ok(())
}

#[test]
fn unknown_desk_does_not_consume_a_ticket() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);
    engine.issue_priority_ticket(None);
    engine.issue_ticket(None);

    assert_eq!(engine.call_next("Z"), CallOutcome::DeskNotFound);

    assert_eq!(engine.priority_queue(), vec![TicketId(1)]);
    assert_eq!(engine.normal_queue(), vec![TicketId(2)]);
    assert!(engine.current_call().is_none());
    assert!(engine.history().is_empty());

    Ok(())
}

#[test]
fn ticket_details_record_patient_and_priority_flag() -> TestResult {
    let mut engine = DispatchEngine::default();
    let id = engine.add_patient(patient("Ana", "Lima", "111", "1950-04-21"));
    let ana = engine
        .patients()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or("patient missing")?;

    let walk_up = engine.issue_ticket(None);
    let linked = engine.issue_priority_ticket(Some(ana.clone()));

    let detail = engine.ticket_detail(walk_up).ok_or("missing detail")?;
    assert!(detail.patient.is_none());
    assert!(!detail.is_priority);

    let detail = engine.ticket_detail(linked).ok_or("missing detail")?;
    assert_eq!(detail.patient.as_ref(), Some(&ana));
    assert!(detail.is_priority);

    // Details survive the call.
    engine.add_desk(frontdesk::registry::Desk::new("A", "Joao"));
    engine.call_next("A");
    assert!(engine.ticket_detail(linked).is_some());
    assert_eq!(engine.ticket_details().len(), 2);

    Ok(())
}
