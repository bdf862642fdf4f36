//! Roster state-flow integration tests.
//!
//! Exercises the collection, filter, and stats layers together the way
//! the session controller drives them.

use wardbook_core::models::{parse_medical_history, PatientDraft, STATUS_UNDER_TREATMENT};
use wardbook_core::roster::{aggregate, filter, Roster};
use wardbook_core::sample::sample_patients;

fn draft_from_form(name: &str, history: &str) -> PatientDraft {
    let mut draft = PatientDraft {
        name: name.to_string(),
        age: 51,
        gender: "Female".into(),
        contact: "0300-1112223".into(),
        address: "Multan, Pakistan".into(),
        disease: "Migraine".into(),
        admission_date: chrono::NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
        doctor_assigned: "Dr. Nida Shah".into(),
        weight_kg: 64.0,
        height_cm: 158,
        bmi: 0.0,
        blood_group: "AB+".into(),
        blood_pressure: "125/80 mmHg".into(),
        medical_history: parse_medical_history(history),
        status: STATUS_UNDER_TREATMENT.into(),
    };
    draft.recompute_bmi().unwrap();
    draft
}

#[test]
fn test_create_is_reflected_exactly_once() {
    let mut roster = Roster::new();
    roster.replace(sample_patients());

    let draft = draft_from_form("Sana Tariq", "Migraine, Anemia");
    roster.apply_create(draft.into_record(4));

    let stats = aggregate(roster.patients());
    assert_eq!(stats.total, 4);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.recovered, 1);

    let hits = filter(roster.patients(), "sana");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 4);
}

#[test]
fn test_update_then_views_rederive() {
    let mut roster = Roster::new();
    roster.replace(sample_patients());

    // Edit draft built from the stored record, the way the form does it.
    let mut draft = roster.find_by_id(3).unwrap().to_draft();
    draft.status = "Recovered".into();
    draft.weight_kg = 90.0;
    draft.recompute_bmi().unwrap();

    // Server echo carries a different id; the roster keeps the local one.
    assert!(roster.apply_update(3, draft.into_record(77)));

    let updated = roster.find_by_id(3).unwrap();
    assert_eq!(updated.id, 3);
    assert_eq!(updated.bmi, 27.8);

    let stats = aggregate(roster.patients());
    assert_eq!(stats.recovered, 2);
}

#[test]
fn test_delete_then_filter_and_stats_shrink() {
    let mut roster = Roster::new();
    roster.replace(sample_patients());

    assert!(roster.apply_delete(1));

    assert!(filter(roster.patients(), "diabetes").is_empty());
    let stats = aggregate(roster.patients());
    assert_eq!(stats.total, 2);
    assert_eq!(stats.active, 0);
}

#[test]
fn test_mutations_do_not_disturb_other_records() {
    let mut roster = Roster::new();
    roster.replace(sample_patients());
    let untouched = roster.find_by_id(2).unwrap().clone();

    roster.apply_delete(1);
    let mut draft = roster.find_by_id(3).unwrap().to_draft();
    draft.disease = "Controlled Hypertension".into();
    roster.apply_update(3, draft.into_record(3));

    assert_eq!(roster.find_by_id(2).unwrap(), &untouched);
}
