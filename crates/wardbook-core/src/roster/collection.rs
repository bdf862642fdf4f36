//! The authoritative in-memory patient collection.
//!
//! Mutations mirror confirmed remote operations: the session controller
//! calls `apply_*` only after the store has acknowledged the
//! corresponding request, so the roster never drifts ahead of the server
//! within a session.

use crate::models::PatientRecord;

/// Ordered collection of patient records, keyed by server-assigned id.
#[derive(Debug, Default)]
pub struct Roster {
    patients: Vec<PatientRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection (bootstrap or fallback population).
    pub fn replace(&mut self, patients: Vec<PatientRecord>) {
        self.patients = patients;
    }

    /// Append a freshly created record.
    pub fn apply_create(&mut self, record: PatientRecord) {
        self.patients.push(record);
    }

    /// Replace the record with the given id.
    ///
    /// The stored id is kept equal to `id` regardless of what the
    /// incoming record carries, guarding against a server echo that
    /// drops or rewrites it. An unknown id is a silent no-op.
    pub fn apply_update(&mut self, id: i64, mut record: PatientRecord) -> bool {
        match self.patients.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                record.id = id;
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id, if present.
    pub fn apply_delete(&mut self, id: i64) -> bool {
        let before = self.patients.len();
        self.patients.retain(|p| p.id != id);
        self.patients.len() < before
    }

    /// Look up a record by id. Linear scan; rosters are human-scale.
    pub fn find_by_id(&self, id: i64) -> Option<&PatientRecord> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// The collection in insertion order, for rendering and derivation.
    pub fn patients(&self) -> &[PatientRecord] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
