// tests/registry.rs

use std::error::Error;

use frontdesk::engine::DispatchEngine;
use frontdesk::kiosk::{issue_for_cpf, KioskOutcome};
use frontdesk::registry::RegistryOutcome;
use frontdesk::types::{CollaboratorId, PatientId, Profile};
use frontdesk_test_utils::builders::{date, patient, CollaboratorBuilder};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn collaborator_ids_are_fresh_even_after_removal() -> TestResult {
    let mut engine = DispatchEngine::default();

    let joao = engine
        .add_collaborator(CollaboratorBuilder::new("Joao", "Silva", "atd001").build())
        .ok_or("atd001 rejected")?;
    let maria = engine
        .add_collaborator(CollaboratorBuilder::new("Maria", "Souza", "atd002").build())
        .ok_or("atd002 rejected")?;
    assert_ne!(joao, maria);

    assert_eq!(engine.remove_collaborator(joao), RegistryOutcome::Removed);
    let ana = engine
        .add_collaborator(
            CollaboratorBuilder::new("Ana", "Reis", "pnl001")
                .profile(Profile::Panel)
                .build(),
        )
        .ok_or("pnl001 rejected")?;

    assert_ne!(ana, joao);
    assert_ne!(ana, maria);
    let ids: Vec<CollaboratorId> = engine.collaborators().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![maria, ana]);

    Ok(())
}

#[test]
fn removing_unknown_records_reports_not_found() -> TestResult {
    let mut engine = DispatchEngine::default();

    assert_eq!(
        engine.remove_collaborator(CollaboratorId(42)),
        RegistryOutcome::NotFound
    );
    assert_eq!(engine.remove_patient(PatientId(42)), RegistryOutcome::NotFound);
    assert_eq!(engine.remove_desk("nowhere"), RegistryOutcome::NotFound);

    Ok(())
}

#[test]
fn removing_a_patient_keeps_issued_ticket_details() -> TestResult {
    let mut engine = DispatchEngine::default();
    let id = engine.add_patient(patient("Ana", "Lima", "111", "1950-04-21"));
    let ana = engine.patients()[0].clone();
    let ticket = engine.issue_ticket(Some(ana));

    assert_eq!(engine.remove_patient(id), RegistryOutcome::Removed);
    assert!(engine.patients().is_empty());

    let detail = engine.ticket_detail(ticket).ok_or("missing detail")?;
    assert_eq!(
        detail.patient.as_ref().map(|p| p.full_name()),
        Some("Ana Lima".to_string())
    );
    assert_eq!(engine.normal_queue(), vec![ticket]);

    Ok(())
}

#[test]
fn patients_are_found_by_trimmed_cpf() -> TestResult {
    let mut engine = DispatchEngine::default();
    engine.add_patient(patient("Ana", "Lima", "11122233344", "1950-04-21"));

    let found = engine.registry().find_patient_by_cpf("  11122233344 ");
    assert_eq!(found.map(|p| p.first_name.as_str()), Some("Ana"));
    assert!(engine.registry().find_patient_by_cpf("000").is_none());

    Ok(())
}

#[test]
fn patient_age_counts_completed_birthdays() -> TestResult {
    let mut engine = DispatchEngine::default();
    engine.add_patient(patient("Carla", "Dias", "333", "1966-01-15"));
    let carla = &engine.patients()[0];

    assert_eq!(carla.age_on(date("2026-01-14")), 59);
    assert_eq!(carla.age_on(date("2026-01-15")), 60);
    assert_eq!(carla.age_on(date("1960-01-01")), 0);

    Ok(())
}

#[test]
fn duplicate_registration_is_refused_without_consuming_an_id() -> TestResult {
    let mut engine = DispatchEngine::default();
    let first = engine
        .add_collaborator(CollaboratorBuilder::new("Joao", "Silva", "atd001").build())
        .ok_or("atd001 rejected")?;

    let again = engine.add_collaborator(
        CollaboratorBuilder::new("Joana", "Silva", "atd001")
            .password("456")
            .build(),
    );
    assert_eq!(again, None);
    assert_eq!(engine.collaborators().len(), 1);
    assert_eq!(engine.collaborators()[0].first_name, "Joao");

    let next = engine
        .add_collaborator(CollaboratorBuilder::new("Maria", "Souza", "atd002").build())
        .ok_or("atd002 rejected")?;
    assert_eq!(next, CollaboratorId(first.0 + 1));

    Ok(())
}

#[test]
fn cpf_lookup_ignores_punctuation_on_both_sides() -> TestResult {
    let mut engine = DispatchEngine::default();
    engine.add_patient(patient("Ana", "Lima", "123.456.789-00", "1950-04-21"));
    engine.add_patient(patient("Bruno", "Costa", "98765432100", "1990-09-02"));

    let registry = engine.registry();
    let first_name = |cpf: &str| {
        registry
            .find_patient_by_cpf(cpf)
            .map(|p| p.first_name.clone())
    };

    assert_eq!(first_name("12345678900"), Some("Ana".to_string()));
    assert_eq!(first_name("123.456.789-00"), Some("Ana".to_string()));
    assert_eq!(first_name("987.654.321-00"), Some("Bruno".to_string()));
    assert_eq!(first_name(" 987654321-00 "), Some("Bruno".to_string()));
    assert_eq!(first_name("...-"), None);
    assert_eq!(first_name(""), None);

    Ok(())
}

#[test]
fn kiosk_accepts_unformatted_cpf_for_formatted_record() -> TestResult {
    let mut engine = DispatchEngine::default();
    engine.add_patient(patient("Ana", "Lima", "123.456.789-00", "1950-04-21"));

    let outcome = issue_for_cpf(&mut engine, "12345678900", date("2024-05-02"), 60);

    assert!(matches!(outcome, KioskOutcome::Issued { priority: true, .. }));
    assert_eq!(engine.priority_queue().len(), 1);

    Ok(())
}
