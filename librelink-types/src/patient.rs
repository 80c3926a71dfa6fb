//! Patient records as returned by the `/llu/connections` endpoint.
//!
//! Field names follow the vendor's JSON verbatim through serde renames; unknown
//! vendor fields are ignored on deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PatientId;

/// One element of the connections list: a patient shared with the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Stable vendor identifier; also the snapshot sort key.
    pub patient_id: PatientId,
    /// Patient first name.
    #[serde(default)]
    pub first_name: String,
    /// Patient last name.
    #[serde(default)]
    pub last_name: String,
    /// Upper target bound in mg/dL.
    pub target_high: f64,
    /// Lower target bound in mg/dL.
    pub target_low: f64,
    /// Most recent glucose reading.
    pub glucose_measurement: GlucoseMeasurement,
    /// Currently paired sensor, when the vendor reports one.
    #[serde(default)]
    pub sensor: Option<SensorInfo>,
}

impl PatientRecord {
    /// `"{first} {last}"`, as used for display and device naming.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Sensor activation epoch seconds, if a sensor is active.
    #[must_use]
    pub fn activation_epoch(&self) -> Option<i64> {
        self.sensor.as_ref().and_then(|s| s.a)
    }
}

/// Latest glucose reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlucoseMeasurement {
    /// Reading in mg/dL.
    pub value_in_mg_per_dl: i64,
    /// Rate-of-change direction, 1 (falling fast) to 5 (rising fast).
    pub trend_arrow: i64,
    /// Sensor-side timestamp, `MM/DD/YYYY hh:mm:ss AM/PM`.
    pub factory_timestamp: String,
    /// Phone-side timestamp in the same format.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Sensor pairing details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensorInfo {
    /// Activation time, epoch seconds.
    #[serde(default)]
    pub a: Option<i64>,
    /// Product type component of the serial.
    #[serde(default)]
    pub pt: Option<SerialPart>,
    /// Serial number component.
    #[serde(default)]
    pub sn: Option<SerialPart>,
}

impl SensorInfo {
    /// `"{pt} {sn}"`, with missing components rendered empty.
    #[must_use]
    pub fn serial(&self) -> String {
        let part = |p: &Option<SerialPart>| p.as_ref().map(ToString::to_string).unwrap_or_default();
        format!("{} {}", part(&self.pt), part(&self.sn))
    }
}

/// Serial component; the vendor sends some as numbers and some as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerialPart {
    /// Numeric component.
    Number(i64),
    /// Textual component.
    Text(String),
}

impl fmt::Display for SerialPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
