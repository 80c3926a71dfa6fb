#![allow(dead_code)]

use std::sync::Arc;

use librelink::{Coordinator, PollSnapshot};
use librelink_core::connector::{FetchOutcome, LibreConnector};
use librelink_core::{GlucoseMeasurement, PatientRecord, SensorInfo, SerialPart};
use librelink_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

pub fn record(id: &str, mg_dl: i64) -> PatientRecord {
    PatientRecord {
        patient_id: id.into(),
        first_name: "Pat".to_string(),
        last_name: id.to_uppercase(),
        target_high: 180.0,
        target_low: 70.0,
        glucose_measurement: GlucoseMeasurement {
            value_in_mg_per_dl: mg_dl,
            trend_arrow: 3,
            factory_timestamp: "3/5/2024 1:02:03 PM".to_string(),
            timestamp: None,
        },
        sensor: Some(SensorInfo {
            a: Some(1_700_000_000),
            pt: Some(SerialPart::Number(4)),
            sn: Some(SerialPart::Text("0M0008B8CL".to_string())),
        }),
    }
}

pub fn patients(ids: &[&str]) -> FetchOutcome {
    FetchOutcome::Patients(PollSnapshot::new(
        ids.iter().map(|id| record(id, 100)).collect(),
    ))
}

pub fn ok(ids: &[&str]) -> MockBehavior<FetchOutcome> {
    MockBehavior::Return(patients(ids))
}

pub async fn coordinator_with(
    behavior: MockBehavior<FetchOutcome>,
) -> (Arc<Coordinator>, DynamicMockController) {
    let (mock, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_connections_behavior(behavior).await;
    let coordinator = Coordinator::builder(mock).build().expect("mock provides connections");
    (coordinator, ctrl)
}

/// Connector that advertises no capabilities.
pub struct Inert;

impl LibreConnector for Inert {
    fn name(&self) -> &'static str {
        "inert"
    }
}
