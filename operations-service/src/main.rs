use operations_service::{config::OperationsConfig, Application};
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = OperationsConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    let application = Application::build(config).await?;
    let result = application.run_until_stopped().await;

    shutdown_tracing();
    Ok(result?)
}
