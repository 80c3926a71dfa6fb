use crate::{PatientRecord, UnitOfMeasurement};

/// Current reading converted to `unit` and rounded to its display precision.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn glucose_value(record: &PatientRecord, unit: UnitOfMeasurement) -> f64 {
    unit.convert_rounded(record.glucose_measurement.value_in_mg_per_dl as f64)
}

/// Raw reading at or above the patient's upper target.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_high(record: &PatientRecord) -> bool {
    record.glucose_measurement.value_in_mg_per_dl as f64 >= record.target_high
}

/// Raw reading at or below the patient's lower target.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_low(record: &PatientRecord) -> bool {
    record.glucose_measurement.value_in_mg_per_dl as f64 <= record.target_low
}
