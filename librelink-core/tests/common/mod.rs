use librelink_core::{GlucoseMeasurement, PatientRecord, SensorInfo, SerialPart};

/// Minimal record with the given id, reading, and trend arrow.
pub fn record(id: &str, mg_dl: i64, trend: i64) -> PatientRecord {
    PatientRecord {
        patient_id: id.into(),
        first_name: "Test".to_string(),
        last_name: format!("Patient {id}"),
        target_high: 180.0,
        target_low: 70.0,
        glucose_measurement: GlucoseMeasurement {
            value_in_mg_per_dl: mg_dl,
            trend_arrow: trend,
            factory_timestamp: "3/5/2024 1:02:03 PM".to_string(),
            timestamp: Some("3/5/2024 2:02:03 PM".to_string()),
        },
        sensor: Some(SensorInfo {
            a: Some(1_700_000_000),
            pt: Some(SerialPart::Number(4)),
            sn: Some(SerialPart::Text("0M0008B8CL".to_string())),
        }),
    }
}
