use std::sync::Arc;

use librelink::{LibreConfig, LibreLinkClient, Region};
use librelink_core::LibreError;
use librelink_core::connector::LibreConnector;

/// Environment variable that switches every demo to the fixture connector.
pub const USE_MOCK_ENV: &str = "LIBRELINK_DEMOS_USE_MOCK";

/// Read account settings from `LIBRELINK_USERNAME`, `LIBRELINK_PASSWORD`,
/// `LIBRELINK_REGION`, and `LIBRELINK_PATIENT_ID`.
///
/// # Errors
/// Returns `InvalidArg` for an unknown region name.
pub fn config_from_env() -> Result<LibreConfig, LibreError> {
    let mut cfg = LibreConfig::new(
        std::env::var("LIBRELINK_USERNAME").unwrap_or_else(|_| "demo@example.com".into()),
        std::env::var("LIBRELINK_PASSWORD").unwrap_or_else(|_| "demo".into()),
    );
    if let Ok(region) = std::env::var("LIBRELINK_REGION") {
        cfg.region = region.parse::<Region>()?;
    }
    cfg.patient_id = std::env::var("LIBRELINK_PATIENT_ID").ok();
    Ok(cfg)
}

/// Return a connector for demos.
///
/// # Errors
/// Returns `Api` if the HTTP client cannot be constructed.
pub fn get_connector(cfg: &LibreConfig) -> Result<Arc<dyn LibreConnector>, LibreError> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(librelink_mock::MockConnector::new()))
    } else {
        let client = LibreLinkClient::builder()
            .region(cfg.region)
            .request_timeout(cfg.request_timeout)
            .build()?;
        Ok(Arc::new(client))
    }
}
