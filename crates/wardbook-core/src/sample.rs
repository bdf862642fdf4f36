//! Built-in demo roster.
//!
//! Shown when the remote store cannot be reached at bootstrap, so the
//! interface stays usable offline. Edits against this roster are still
//! sent to the store and will fail with their own notices.

use chrono::NaiveDate;

use crate::models::{PatientRecord, STATUS_RECOVERED, STATUS_UNDER_TREATMENT};

/// Construct a fixed admission date. Only called with the literal
/// calendar dates below; the unit tests exercise every record.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("demo roster admission dates are valid calendar dates")
}

/// The fixed three-record fallback dataset.
pub fn sample_patients() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            id: 1,
            name: "Ali Raza".into(),
            age: 34,
            gender: "Male".into(),
            contact: "0321-5678901".into(),
            address: "Lahore, Pakistan".into(),
            disease: "Diabetes Type 2".into(),
            admission_date: date(2025, 10, 1),
            doctor_assigned: "Dr. Ahmed Khan".into(),
            weight_kg: 82.0,
            height_cm: 175,
            bmi: 26.8,
            blood_group: "B+".into(),
            blood_pressure: "130/85 mmHg".into(),
            medical_history: vec!["High blood sugar".into(), "Obesity".into()],
            status: STATUS_UNDER_TREATMENT.into(),
        },
        PatientRecord {
            id: 2,
            name: "Ayesha Fatima".into(),
            age: 27,
            gender: "Female".into(),
            contact: "0314-8902345".into(),
            address: "Karachi, Pakistan".into(),
            disease: "Asthma".into(),
            admission_date: date(2025, 9, 25),
            doctor_assigned: "Dr. Sara Malik".into(),
            weight_kg: 58.0,
            height_cm: 162,
            bmi: 22.1,
            blood_group: "O+".into(),
            blood_pressure: "118/75 mmHg".into(),
            medical_history: vec!["Allergic Rhinitis".into(), "Seasonal Asthma".into()],
            status: STATUS_RECOVERED.into(),
        },
        PatientRecord {
            id: 3,
            name: "Usman Ali".into(),
            age: 45,
            gender: "Male".into(),
            contact: "0332-4567890".into(),
            address: "Islamabad, Pakistan".into(),
            disease: "Hypertension".into(),
            admission_date: date(2025, 9, 28),
            doctor_assigned: "Dr. Hamza Qureshi".into(),
            weight_kg: 95.0,
            height_cm: 180,
            bmi: 29.3,
            blood_group: "A+".into(),
            blood_pressure: "160/100 mmHg".into(),
            medical_history: vec!["High Cholesterol".into(), "Smoking".into()],
            status: "Critical".into(),
        },
    ]
}
