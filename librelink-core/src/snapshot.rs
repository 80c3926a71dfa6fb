//! The most recent successfully fetched patient list.

use std::slice;

use crate::{LibreError, PatientRecord};

/// Immutable patient list ordered ascending by `patientId`.
///
/// Integer ids compare numerically and sort before any other id.
///
/// Ordering is a function of the patient set only, so an unchanged set keeps
/// every patient at the same position across polls. Consumers should still look
/// patients up by id; positions shift when patients are added or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollSnapshot {
    patients: Vec<PatientRecord>,
}

impl PollSnapshot {
    /// Build a snapshot, sorting the records by `patientId`.
    #[must_use]
    pub fn new(mut patients: Vec<PatientRecord>) -> Self {
        patients.sort_by(|a, b| a.patient_id.cmp(&b.patient_id));
        Self { patients }
    }

    /// Records in snapshot order.
    #[must_use]
    pub fn patients(&self) -> &[PatientRecord] {
        &self.patients
    }

    /// Number of patients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// True when the account shares no patients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Iterate records in snapshot order.
    pub fn iter(&self) -> slice::Iter<'_, PatientRecord> {
        self.patients.iter()
    }

    /// Patient ids in snapshot order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.patients.iter().map(|p| p.patient_id.as_str())
    }

    /// Look a patient up by id.
    #[must_use]
    pub fn get(&self, patient_id: &str) -> Option<&PatientRecord> {
        self.patients
            .binary_search_by(|p| p.patient_id.cmp_str(patient_id))
            .ok()
            .map(|i| &self.patients[i])
    }

    /// Like [`get`](Self::get) but reports a missing patient as `NotFound`.
    ///
    /// # Errors
    /// Returns `NotFound` when no record carries `patient_id`.
    pub fn require(&self, patient_id: &str) -> Result<&PatientRecord, LibreError> {
        self.get(patient_id)
            .ok_or_else(|| LibreError::not_found(format!("patient {patient_id}")))
    }
}

impl<'a> IntoIterator for &'a PollSnapshot {
    type Item = &'a PatientRecord;
    type IntoIter = slice::Iter<'a, PatientRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.patients.iter()
    }
}
