//! Sensor lifecycle and measurement timestamps.
//!
//! The vendor's measurement timestamps carry no zone marker. `FactoryTimestamp`
//! is the sensor-side clock, which the vendor keeps in UTC, so it is the field
//! used here and it is interpreted as UTC. The phone-local `Timestamp` field is
//! not consulted.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::{LibreError, PatientRecord};

/// Fixed wear period of a sensor, in days.
pub const SENSOR_LIFETIME_DAYS: i64 = 14;

/// `MM/DD/YYYY hh:mm:ss AM/PM`; single-digit fields are accepted.
pub const VENDOR_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Sensor activation time, if the record reports an active sensor.
///
/// # Errors
/// Returns `Data` when the epoch is outside the representable range.
pub fn activation_timestamp(record: &PatientRecord) -> Result<Option<DateTime<Utc>>, LibreError> {
    record
        .activation_epoch()
        .map(|secs| {
            DateTime::<Utc>::from_timestamp(secs, 0)
                .ok_or_else(|| LibreError::Data(format!("activation epoch {secs} out of range")))
        })
        .transpose()
}

/// Fixed wear period of a sensor.
#[must_use]
pub fn sensor_lifetime() -> TimeDelta {
    TimeDelta::days(SENSOR_LIFETIME_DAYS)
}

/// Activation plus [`sensor_lifetime`].
///
/// # Errors
/// Same as [`activation_timestamp`], or `Data` if the sum overflows.
pub fn expiration_timestamp(record: &PatientRecord) -> Result<Option<DateTime<Utc>>, LibreError> {
    activation_timestamp(record)?
        .map(|a| {
            a.checked_add_signed(sensor_lifetime())
                .ok_or_else(|| LibreError::Data("expiration timestamp overflows".into()))
        })
        .transpose()
}

/// Time of the latest glucose reading.
///
/// # Errors
/// Returns `Data` when `FactoryTimestamp` does not match [`VENDOR_TIMESTAMP_FORMAT`].
pub fn last_measurement_timestamp(record: &PatientRecord) -> Result<DateTime<Utc>, LibreError> {
    parse_vendor_timestamp(&record.glucose_measurement.factory_timestamp)
}

/// Parse a vendor timestamp string as UTC.
///
/// # Errors
/// Returns `Data` on a malformed string.
pub fn parse_vendor_timestamp(raw: &str) -> Result<DateTime<Utc>, LibreError> {
    NaiveDateTime::parse_from_str(raw.trim(), VENDOR_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| LibreError::Data(format!("bad vendor timestamp {raw:?}: {e}")))
}
