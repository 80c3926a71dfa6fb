use std::time::Duration;

use librelink_types::{LibreConfig, LibreError, MIN_POLL_INTERVAL, Region, UnitOfMeasurement};

#[test]
fn config_defaults_apply_when_fields_missing() {
    let json = r#"{"username":"a@b.c","password":"pw"}"#;
    let cfg: LibreConfig = serde_json::from_str(json).expect("deserialize config");

    assert_eq!(cfg.region, Region::Global);
    assert_eq!(cfg.unit_of_measurement, UnitOfMeasurement::MgPerDl);
    assert_eq!(cfg.patient_id, None);
    assert_eq!(cfg.poll_interval, Duration::from_secs(60));
    assert_eq!(cfg.request_timeout, Duration::from_secs(20));
}

#[test]
fn config_uses_vendor_names_for_region_and_unit() {
    let json = r#"{
        "username": "a@b.c",
        "password": "pw",
        "region": "United States",
        "unit_of_measurement": "mmol/L",
        "patient_id": "p-1"
    }"#;
    let cfg: LibreConfig = serde_json::from_str(json).expect("deserialize config");

    assert_eq!(cfg.region, Region::UnitedStates);
    assert_eq!(cfg.region.base_url(), "https://api-us.libreview.io");
    assert_eq!(cfg.unit_of_measurement, UnitOfMeasurement::MmolPerL);
    assert_eq!(cfg.patient_id.as_deref(), Some("p-1"));

    let back = serde_json::to_value(&cfg).expect("serialize config");
    assert_eq!(back["region"], "United States");
    assert_eq!(back["unit_of_measurement"], "mmol/L");
}

#[test]
fn durations_are_plain_seconds() {
    let json = r#"{"username":"a@b.c","password":"pw","poll_interval":120,"request_timeout":5}"#;
    let cfg: LibreConfig = serde_json::from_str(json).expect("deserialize config");
    assert_eq!(cfg.poll_interval, Duration::from_secs(120));
    assert_eq!(cfg.request_timeout, Duration::from_secs(5));

    let back = serde_json::to_value(LibreConfig::new("a@b.c", "pw")).expect("serialize config");
    assert_eq!(back["poll_interval"], 60);
    assert_eq!(back["request_timeout"], 20);

    let nested = r#"{"username":"a@b.c","password":"pw","poll_interval":{"secs":60,"nanos":0}}"#;
    assert!(serde_json::from_str::<LibreConfig>(nested).is_err());
}

#[test]
fn poll_interval_is_clamped_to_minimum() {
    let mut cfg = LibreConfig::new("a@b.c", "pw");
    cfg.poll_interval = Duration::from_secs(5);
    assert_eq!(cfg.effective_poll_interval(), MIN_POLL_INTERVAL);

    cfg.poll_interval = Duration::from_secs(300);
    assert_eq!(cfg.effective_poll_interval(), Duration::from_secs(300));
}

#[test]
fn validate_rejects_blank_credentials() {
    let cfg = LibreConfig::new("  ", "pw");
    assert!(matches!(cfg.validate(), Err(LibreError::InvalidArg(_))));

    let cfg = LibreConfig::new("a@b.c", "");
    assert!(matches!(cfg.validate(), Err(LibreError::InvalidArg(_))));

    assert!(LibreConfig::new("a@b.c", "pw").validate().is_ok());
}

#[test]
fn debug_output_redacts_password() {
    let cfg = LibreConfig::new("a@b.c", "hunter2");
    let dbg = format!("{cfg:?}");
    assert!(!dbg.contains("hunter2"));
    assert!(dbg.contains("a@b.c"));
}
