//! Patient models and derived values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status value counted as "active" by the statistics view.
pub const STATUS_UNDER_TREATMENT: &str = "Under Treatment";

/// Status value counted as "recovered" by the statistics view.
pub const STATUS_RECOVERED: &str = "Recovered";

/// Errors in client-side derivations, caught before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot derive BMI: height must be greater than zero")]
    NonPositiveHeight,
}

/// A patient record as held in the roster, id assigned by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Server-assigned identifier, unique within the roster
    pub id: i64,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: String,
    /// Contact number (free text, typically digits and punctuation)
    pub contact: String,
    /// Home address
    pub address: String,
    /// Primary disease or condition
    pub disease: String,
    /// Date of admission
    pub admission_date: NaiveDate,
    /// Doctor in charge
    pub doctor_assigned: String,
    /// Weight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: u32,
    /// Body mass index, derived from weight and height, one decimal
    pub bmi: f64,
    /// Blood group (e.g. "B+")
    pub blood_group: String,
    /// Latest blood pressure reading (e.g. "130/85 mmHg")
    pub blood_pressure: String,
    /// Prior conditions, in the order they were entered
    pub medical_history: Vec<String>,
    /// Treatment status ("Under Treatment", "Recovered", "Critical", ...)
    pub status: String,
}

impl PatientRecord {
    /// Turn this record into an edit draft (drops the id).
    pub fn to_draft(&self) -> PatientDraft {
        PatientDraft {
            name: self.name.clone(),
            age: self.age,
            gender: self.gender.clone(),
            contact: self.contact.clone(),
            address: self.address.clone(),
            disease: self.disease.clone(),
            admission_date: self.admission_date,
            doctor_assigned: self.doctor_assigned.clone(),
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            bmi: self.bmi,
            blood_group: self.blood_group.clone(),
            blood_pressure: self.blood_pressure.clone(),
            medical_history: self.medical_history.clone(),
            status: self.status.clone(),
        }
    }
}

/// A patient submission without a server-confirmed id.
///
/// The `bmi` field is never taken from the form; callers refresh it from
/// the submitted weight and height before sending the draft anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientDraft {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub address: String,
    pub disease: String,
    pub admission_date: NaiveDate,
    pub doctor_assigned: String,
    pub weight_kg: f64,
    pub height_cm: u32,
    pub bmi: f64,
    pub blood_group: String,
    pub blood_pressure: String,
    pub medical_history: Vec<String>,
    pub status: String,
}

impl PatientDraft {
    /// Recompute `bmi` from the current weight and height.
    pub fn recompute_bmi(&mut self) -> Result<(), DomainError> {
        self.bmi = compute_bmi(self.weight_kg, self.height_cm)?;
        Ok(())
    }

    /// Promote this draft to a full record under the given id.
    pub fn into_record(self, id: i64) -> PatientRecord {
        PatientRecord {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            contact: self.contact,
            address: self.address,
            disease: self.disease,
            admission_date: self.admission_date,
            doctor_assigned: self.doctor_assigned,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            bmi: self.bmi,
            blood_group: self.blood_group,
            blood_pressure: self.blood_pressure,
            medical_history: self.medical_history,
            status: self.status,
        }
    }
}

/// Compute BMI from weight in kg and height in cm, rounded to one decimal.
pub fn compute_bmi(weight_kg: f64, height_cm: u32) -> Result<f64, DomainError> {
    if height_cm == 0 {
        return Err(DomainError::NonPositiveHeight);
    }
    let height_m = height_cm as f64 / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 10.0).round() / 10.0)
}

/// Parse a comma-separated history field into its entries.
///
/// Each segment is trimmed; empty segments are dropped; order and
/// duplicates are preserved.
pub fn parse_medical_history(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join history entries back into the comma-separated form shown in forms.
pub fn serialize_medical_history(history: &[String]) -> String {
    history.join(", ")
}
