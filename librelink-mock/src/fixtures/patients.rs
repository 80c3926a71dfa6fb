use librelink_core::{GlucoseMeasurement, PatientRecord, SensorInfo, SerialPart};

/// Patients followed by the fixture account, deliberately out of `patientId` order.
pub fn all() -> Vec<PatientRecord> {
    vec![
        rec("b3a1c2d4-0002", "Bea", 212, 5, Some((1_709_251_200, 3, "MH0C2X9P1"))),
        rec("a0f9e8d7-0001", "Ada", 104, 3, Some((1_709_856_000, 0, "0M0008B8CL"))),
        rec("c7d6e5f4-0003", "Cy", 63, 1, None),
    ]
}

fn rec(
    id: &str,
    first: &str,
    mg_dl: i64,
    trend: i64,
    sensor: Option<(i64, i64, &str)>,
) -> PatientRecord {
    PatientRecord {
        patient_id: id.into(),
        first_name: first.to_string(),
        last_name: "Example".to_string(),
        target_high: 180.0,
        target_low: 70.0,
        glucose_measurement: GlucoseMeasurement {
            value_in_mg_per_dl: mg_dl,
            trend_arrow: trend,
            factory_timestamp: "3/14/2024 8:15:00 AM".to_string(),
            timestamp: Some("3/14/2024 9:15:00 AM".to_string()),
        },
        sensor: sensor.map(|(a, pt, sn)| SensorInfo {
            a: Some(a),
            pt: Some(SerialPart::Number(pt)),
            sn: Some(SerialPart::Text(sn.to_string())),
        }),
    }
}
