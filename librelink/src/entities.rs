//! Per-patient views over the coordinator's current snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use librelink_core::metrics::activation_timestamp;
use librelink_core::{LibreError, Metric, MetricValue, PatientRecord, UnitOfMeasurement};
use serde::Serialize;

use crate::coordinator::Coordinator;

/// Extra attributes attached to every entity of a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorAttributes {
    /// Vendor patient id.
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// `"{first} {last}"`.
    #[serde(rename = "Patient")]
    pub patient: String,
    /// `"{pt} {sn}"`; `None` without a sensor.
    #[serde(rename = "Serial number")]
    pub serial_number: Option<String>,
    /// Sensor activation time; `None` without an active sensor.
    #[serde(rename = "Activation date")]
    pub activation_date: Option<DateTime<Utc>>,
}

/// All metrics of one patient, resolved by `patientId` on every read.
///
/// Holds no record itself: each accessor looks the patient up in the latest
/// snapshot, so a view stays valid across refreshes and reorderings.
#[derive(Clone)]
pub struct PatientEntities {
    coordinator: Arc<Coordinator>,
    patient_id: String,
    unit: UnitOfMeasurement,
}

impl std::fmt::Debug for PatientEntities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatientEntities")
            .field("patient_id", &self.patient_id)
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}

impl PatientEntities {
    /// View of `patient_id` reading through `coordinator`.
    #[must_use]
    pub const fn new(
        coordinator: Arc<Coordinator>,
        patient_id: String,
        unit: UnitOfMeasurement,
    ) -> Self {
        Self {
            coordinator,
            patient_id,
            unit,
        }
    }

    /// Vendor patient id.
    #[must_use]
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Display unit for the measurement.
    #[must_use]
    pub const fn unit(&self) -> UnitOfMeasurement {
        self.unit
    }

    /// The patient as found in the current snapshot.
    ///
    /// # Errors
    /// Returns `NotFound` when the patient left the snapshot.
    pub fn record(&self) -> Result<PatientRecord, LibreError> {
        self.coordinator.patient(&self.patient_id)
    }

    /// Device name, `"{first} {last}"`.
    ///
    /// # Errors
    /// Returns `NotFound` when the patient left the snapshot.
    pub fn device_name(&self) -> Result<String, LibreError> {
        self.record().map(|r| r.full_name())
    }

    /// Current value of `metric`; `Ok(None)` when the record lacks the data.
    ///
    /// # Errors
    /// `NotFound` for a vanished patient, `Data` for a malformed record.
    pub fn value(&self, metric: Metric) -> Result<Option<MetricValue>, LibreError> {
        metric.evaluate(&self.record()?, self.unit)
    }

    /// Icon for `metric` at its current value.
    ///
    /// # Errors
    /// `NotFound` for a vanished patient, `Data` for an out-of-range trend.
    pub fn icon(&self, metric: Metric) -> Result<&'static str, LibreError> {
        metric.icon(&self.record()?)
    }

    /// Whether `metric` should be shown as available right now.
    #[must_use]
    pub fn is_available(&self, metric: Metric) -> bool {
        self.coordinator.is_available()
            && self
                .record()
                .is_ok_and(|r| metric.is_available(&r))
    }

    /// Stable unique id of `metric` for this patient.
    #[must_use]
    pub fn unique_id(&self, metric: Metric) -> String {
        metric.unique_id(&self.patient_id)
    }

    /// Attributes shared by all entities of this patient.
    ///
    /// # Errors
    /// `NotFound` for a vanished patient, `Data` for an out-of-range activation time.
    pub fn attributes(&self) -> Result<SensorAttributes, LibreError> {
        let record = self.record()?;
        Ok(SensorAttributes {
            patient_id: record.patient_id.to_string(),
            patient: record.full_name(),
            serial_number: record.sensor.as_ref().map(|s| s.serial()),
            activation_date: activation_timestamp(&record)?,
        })
    }
}
