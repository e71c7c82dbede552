// tests/serving_slots.rs

use std::error::Error;

use frontdesk::engine::{CallOutcome, FinishOutcome};
use frontdesk::registry::{Desk, RegistryOutcome};
use frontdesk::types::TicketId;
use frontdesk_test_utils::builders::engine_with_desks;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn two_desks_finish_only_clears_the_named_one() -> TestResult {
    let mut engine = engine_with_desks(&["A", "B"]);
    engine.issue_ticket(None);
    engine.issue_ticket(None);

    engine.call_next("A");
    engine.call_next("B");
    assert_eq!(engine.serving("A"), Some(TicketId(1)));
    assert_eq!(engine.serving("B"), Some(TicketId(2)));

    let outcome = engine.finish_serving("A");
    assert_eq!(
        outcome,
        FinishOutcome::Finished {
            ticket: Some(TicketId(1))
        }
    );
    assert_eq!(engine.serving("A"), None);
    assert_eq!(engine.serving("B"), Some(TicketId(2)));

    Ok(())
}

#[test]
fn finish_leaves_queues_history_and_current_call_alone() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);
    engine.issue_ticket(None);
    engine.issue_ticket(None);
    engine.call_next("A");

    let current = engine.current_call().cloned();
    engine.finish_serving("A");

    assert_eq!(engine.normal_queue(), vec![TicketId(2)]);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.current_call().cloned(), current);

    // Finishing an idle desk is harmless.
    assert_eq!(
        engine.finish_serving("A"),
        FinishOutcome::Finished { ticket: None }
    );

    Ok(())
}

#[test]
fn finish_for_unknown_desk_is_reported_and_changes_nothing() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);
    engine.issue_ticket(None);
    engine.call_next("A");

    assert_eq!(engine.finish_serving("Z"), FinishOutcome::DeskNotFound);
    assert_eq!(engine.serving("A"), Some(TicketId(1)));
    assert!(!engine.serving_slots().contains_key("Z"));

    Ok(())
}

#[test]
fn a_new_call_replaces_the_desk_slot_without_finish() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);
    engine.issue_ticket(None);
    engine.issue_ticket(None);

    engine.call_next("A");
    engine.call_next("A");
    assert_eq!(engine.serving("A"), Some(TicketId(2)));

    Ok(())
}

#[test]
fn duplicate_desk_names_are_refused() -> TestResult {
    let mut engine = engine_with_desks(&["A"]);

    assert_eq!(
        engine.add_desk(Desk::new("A", "Someone Else")),
        RegistryOutcome::Duplicate
    );
    assert_eq!(engine.desks().len(), 1);
    assert_eq!(engine.desks()[0].attendant, "Attendant A");

    Ok(())
}

#[test]
fn removing_a_desk_keeps_its_calls_in_history() -> TestResult {
    let mut engine = engine_with_desks(&["A", "B"]);
    engine.issue_ticket(None);
    engine.issue_ticket(None);
    engine.call_next("A");

    assert_eq!(engine.remove_desk("A"), RegistryOutcome::Removed);
    assert_eq!(engine.remove_desk("A"), RegistryOutcome::NotFound);

    assert!(!engine.serving_slots().contains_key("A"));
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history().latest().map(|c| c.desk.as_str()), Some("A"));
    assert_eq!(engine.normal_queue(), vec![TicketId(2)]);
    assert_eq!(engine.call_next("A"), CallOutcome::DeskNotFound);

    // Re-adding the desk starts with an empty slot.
    engine.add_desk(Desk::new("A", "Joao"));
    assert_eq!(engine.serving("A"), None);

    Ok(())
}
