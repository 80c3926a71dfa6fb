use librelink::Integration;
use librelink_demos::common::{config_from_env, get_connector};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,librelink=debug,librelink_client=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let cfg = config_from_env()?;
    let connector = get_connector(&cfg)?;
    let integration = Integration::start_with_connector(cfg, connector).await?;

    tracing::info!(
        patients = integration.entities()?.len(),
        "integration ready"
    );
    integration.stop().await;
    Ok(())
}
