//! Free-text search projection over the roster.

use crate::models::PatientRecord;

/// Derive the subsequence of `patients` matching a free-text query.
///
/// The query is trimmed and lowercased; an empty normalized query keeps
/// every record. Otherwise a record matches when its name, disease, or
/// assigned doctor contains the query case-insensitively, or its contact
/// contains the normalized query as a literal substring. The contact
/// field itself is not case-folded, so uppercase contact fragments never
/// match. Relative order is preserved and the source slice is never
/// mutated.
pub fn filter<'a>(patients: &'a [PatientRecord], query: &str) -> Vec<&'a PatientRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return patients.iter().collect();
    }

    patients
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.disease.to_lowercase().contains(&needle)
                || p.doctor_assigned.to_lowercase().contains(&needle)
                || p.contact.contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_patients;

    #[test]
    fn test_empty_query_is_identity() {
        let patients = sample_patients();
        let result = filter(&patients, "");
        assert_eq!(result.len(), patients.len());
        for (got, want) in result.iter().zip(&patients) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let patients = sample_patients();
        assert_eq!(filter(&patients, "   ").len(), patients.len());
    }

    #[test]
    fn test_matches_disease_case_insensitively() {
        let patients = sample_patients();
        let result = filter(&patients, "asthma");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ayesha Fatima");
    }

    #[test]
    fn test_matches_doctor_assigned() {
        let patients = sample_patients();
        let result = filter(&patients, "QURESHI");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Usman Ali");
    }

    #[test]
    fn test_matches_contact_literally() {
        let patients = sample_patients();
        let result = filter(&patients, "0321-56");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ali Raza");
    }

    #[test]
    fn test_contact_match_uses_normalized_query() {
        let mut patients = sample_patients();
        patients[0].contact = "0321-EXT-55".into();

        // The query is lowercased before the literal contact comparison,
        // so an uppercase contact fragment never matches.
        assert!(filter(&patients, "EXT").is_empty());
        assert!(filter(&patients, "ext").is_empty());

        let hits = filter(&patients, "0321");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ali Raza");
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let patients = sample_patients();
        assert!(filter(&patients, "no such patient").is_empty());
    }

    #[test]
    fn test_preserves_relative_order() {
        let patients = sample_patients();
        // Every demo record has an assigned doctor titled "Dr.".
        let result = filter(&patients, "dr.");
        let names: Vec<_> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ali Raza", "Ayesha Fatima", "Usman Ali"]);
    }
}
