use librelink::{Integration, Metric, MetricValue};
use librelink_demos::common::{config_from_env, get_connector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Read account settings (fixture account when LIBRELINK_DEMOS_USE_MOCK is set).
    let cfg = config_from_env()?;
    let connector = get_connector(&cfg)?;

    // 2. Log in and fetch the patient list once.
    let integration = Integration::start_with_connector(cfg, connector).await?;

    // 3. Print every metric for every exposed patient.
    for patient in integration.entities()? {
        println!("== {} ({})", patient.device_name()?, patient.patient_id());
        for metric in Metric::ALL {
            if !patient.is_available(metric) {
                println!("  {:<28} unavailable", metric.name());
                continue;
            }
            let shown = match patient.value(metric)? {
                Some(MetricValue::Glucose { value, unit }) => format!("{value} {unit}"),
                Some(MetricValue::Trend(t)) => t.label().to_string(),
                Some(MetricValue::Timestamp(ts)) => ts.to_rfc3339(),
                Some(MetricValue::Flag(f)) => f.to_string(),
                None => "-".to_string(),
            };
            println!("  {:<28} {shown}  [{}]", metric.name(), patient.icon(metric)?);
        }
    }

    integration.stop().await;
    Ok(())
}
