//! Vendor patient identifier.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Identifier of a patient as sent in `patientId`.
///
/// The vendor sends either a string or a JSON integer; both are kept in their
/// textual form. Ordering is numeric when both ids are integers, integers sort
/// before non-numeric ids, and non-numeric ids compare lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawPatientId")]
pub struct PatientId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPatientId {
    Text(String),
    Integer(i64),
}

impl From<RawPatientId> for PatientId {
    fn from(raw: RawPatientId) -> Self {
        match raw {
            RawPatientId::Text(s) => Self(s),
            RawPatientId::Integer(n) => Self(n.to_string()),
        }
    }
}

/// Sort key shared by [`PatientId`] and plain `&str` lookups.
///
/// The textual form is the final tie-breaker so `"03"` and `"3"` stay distinct.
#[must_use]
pub fn patient_id_key(id: &str) -> (u8, i64, &str) {
    id.parse::<i64>().map_or((1, 0, id), |n| (0, n, id))
}

impl PatientId {
    /// Textual form of the id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a textual id using the snapshot order.
    #[must_use]
    pub fn cmp_str(&self, other: &str) -> Ordering {
        patient_id_key(&self.0).cmp(&patient_id_key(other))
    }
}

impl Ord for PatientId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_str(&other.0)
    }
}

impl PartialOrd for PatientId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for PatientId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PatientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PatientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PatientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for PatientId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl PartialEq<str> for PatientId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PatientId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
