use std::time::Duration;

use librelink::{Integration, Metric, MetricValue};
use librelink_demos::common::{USE_MOCK_ENV, config_from_env, get_connector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cfg = config_from_env()?;
    let connector = get_connector(&cfg)?;
    let integration = Integration::start_with_connector(cfg, connector).await?;
    let coordinator = integration.coordinator().clone();

    // In CI, show one report and exit instead of polling forever.
    let rounds = if std::env::var(USE_MOCK_ENV).is_ok() { 1 } else { usize::MAX };
    let mut report = tokio::time::interval(coordinator.interval());

    for _ in 0..rounds {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = report.tick() => {}
        }
        if coordinator.needs_reauth() {
            eprintln!("credentials rejected; re-run with new credentials");
            break;
        }
        if let Some(err) = coordinator.last_error() {
            eprintln!("last poll failed: {err}");
        }
        for patient in integration.entities()? {
            if let Some(MetricValue::Glucose { value, unit }) = patient.value(Metric::Measurement)? {
                println!(
                    "{} {value} {unit} (as of {:?})",
                    patient.device_name()?,
                    coordinator.last_success()
                );
            }
        }
    }

    tokio::time::timeout(Duration::from_secs(5), integration.stop()).await?;
    Ok(())
}
