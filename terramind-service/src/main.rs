use dotenvy::dotenv;
use terramind_service::config::Settings;
use terramind_service::services::metrics::init_metrics;
use terramind_service::startup::Application;

use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("terramind-service", "info");
    init_metrics();

    let settings = Settings::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        demo_mode = settings.demo_mode,
        model = %settings.model.name,
        "Starting terramind-service"
    );

    let app = Application::build(settings).await?;
    tracing::info!("Listening on port {}", app.port());

    app.run_until_stopped().await?;

    Ok(())
}
