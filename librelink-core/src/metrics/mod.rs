//! Derivation of display values from a single patient record.
//!
//! Every function here is pure: the same record and unit always produce the same
//! output. [`Metric`] tags the seven values a consumer can expose per patient.

mod glucose;
mod timestamps;
mod trend;

pub use glucose::{glucose_value, is_high, is_low};
pub use timestamps::{
    SENSOR_LIFETIME_DAYS, VENDOR_TIMESTAMP_FORMAT, activation_timestamp, expiration_timestamp,
    last_measurement_timestamp, parse_vendor_timestamp, sensor_lifetime,
};
pub use trend::Trend;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{LibreError, PatientRecord, UnitOfMeasurement};

/// Icon shown for the glucose measurement and other non-trend values.
pub const GLUCOSE_VALUE_ICON: &str = "mdi:diabetes";

/// Broad category of a metric, mirroring how a host platform groups entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// A numeric measurement with a unit.
    Measurement,
    /// A textual state.
    Text,
    /// A point in time.
    Timestamp,
    /// An on/off safety flag.
    Flag,
}

/// Per-patient value a consumer can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Current glucose in the configured unit.
    Measurement,
    /// Trend label and icon.
    Trend,
    /// Sensor activation time.
    ActivationTimestamp,
    /// Sensor activation plus its fixed lifetime.
    ExpirationTimestamp,
    /// Time of the latest reading.
    LastMeasurementTimestamp,
    /// Reading at or above the upper target.
    IsHigh,
    /// Reading at or below the lower target.
    IsLow,
}

/// Evaluated metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    /// Converted and rounded glucose.
    Glucose {
        /// Value in `unit`, rounded to `unit.suggested_display_precision()`.
        value: f64,
        /// Unit of `value`.
        unit: UnitOfMeasurement,
    },
    /// Trend direction.
    Trend(Trend),
    /// UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// Boolean flag.
    Flag(bool),
}

impl Metric {
    /// All metrics in a stable order.
    pub const ALL: [Self; 7] = [
        Self::Measurement,
        Self::Trend,
        Self::ActivationTimestamp,
        Self::ExpirationTimestamp,
        Self::LastMeasurementTimestamp,
        Self::IsHigh,
        Self::IsLow,
    ];

    /// Display name, also the suffix of the unique id.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Measurement => "Measurement",
            Self::Trend => "Trend",
            Self::ActivationTimestamp => "Application Timestamp",
            Self::ExpirationTimestamp => "Expiration Timestamp",
            Self::LastMeasurementTimestamp => "Last Measurement Timestamp",
            Self::IsHigh => "Is High",
            Self::IsLow => "Is Low",
        }
    }

    /// Category of the metric.
    #[must_use]
    pub const fn kind(self) -> MetricKind {
        match self {
            Self::Measurement => MetricKind::Measurement,
            Self::Trend => MetricKind::Text,
            Self::ActivationTimestamp
            | Self::ExpirationTimestamp
            | Self::LastMeasurementTimestamp => MetricKind::Timestamp,
            Self::IsHigh | Self::IsLow => MetricKind::Flag,
        }
    }

    /// Whether the record carries what this metric needs.
    ///
    /// Only the sensor lifecycle metrics can be unavailable: they require an
    /// activation time.
    #[must_use]
    pub fn is_available(self, record: &PatientRecord) -> bool {
        match self {
            Self::ActivationTimestamp | Self::ExpirationTimestamp => {
                record.activation_epoch().is_some()
            }
            _ => true,
        }
    }

    /// Icon for the current value.
    ///
    /// # Errors
    /// Returns `Data` for a trend arrow outside `1..=5`.
    pub fn icon(self, record: &PatientRecord) -> Result<&'static str, LibreError> {
        match self {
            Self::Trend => Trend::from_arrow(record.glucose_measurement.trend_arrow).map(Trend::icon),
            _ => Ok(GLUCOSE_VALUE_ICON),
        }
    }

    /// Evaluate the metric. `Ok(None)` means the metric is unavailable for this record.
    ///
    /// # Errors
    /// Returns `Data` when the record violates its contract (trend arrow out of
    /// range, unparsable timestamp, activation epoch out of range).
    pub fn evaluate(
        self,
        record: &PatientRecord,
        unit: UnitOfMeasurement,
    ) -> Result<Option<MetricValue>, LibreError> {
        let value = match self {
            Self::Measurement => Some(MetricValue::Glucose {
                value: glucose_value(record, unit),
                unit,
            }),
            Self::Trend => Some(MetricValue::Trend(Trend::from_arrow(
                record.glucose_measurement.trend_arrow,
            )?)),
            Self::ActivationTimestamp => activation_timestamp(record)?.map(MetricValue::Timestamp),
            Self::ExpirationTimestamp => expiration_timestamp(record)?.map(MetricValue::Timestamp),
            Self::LastMeasurementTimestamp => Some(MetricValue::Timestamp(
                last_measurement_timestamp(record)?,
            )),
            Self::IsHigh => Some(MetricValue::Flag(is_high(record))),
            Self::IsLow => Some(MetricValue::Flag(is_low(record))),
        };
        Ok(value)
    }

    /// `"{patient_id} {name}"` lower-cased with spaces replaced by underscores.
    #[must_use]
    pub fn unique_id(self, patient_id: &str) -> String {
        format!("{patient_id} {}", self.name())
            .replace(' ', "_")
            .to_lowercase()
    }
}
