//! Summary statistics over the roster.

use serde::Serialize;

use crate::models::{PatientRecord, STATUS_RECOVERED, STATUS_UNDER_TREATMENT};

/// Counts shown in the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub recovered: usize,
}

/// Derive the stats for the current collection.
///
/// Status matches are exact and case-sensitive. Recomputed from scratch
/// after every mutation; rosters are small enough that incremental
/// maintenance would buy nothing.
pub fn aggregate(patients: &[PatientRecord]) -> RosterStats {
    RosterStats {
        total: patients.len(),
        active: patients
            .iter()
            .filter(|p| p.status == STATUS_UNDER_TREATMENT)
            .count(),
        recovered: patients
            .iter()
            .filter(|p| p.status == STATUS_RECOVERED)
            .count(),
    }
}
