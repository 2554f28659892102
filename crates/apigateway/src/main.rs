use anyhow::{Context, Result};
use apigateway::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::utils::{Telemetry, init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let enable_file_log = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);
    let otel_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://otel-collector:4317".to_string());

    let mut telemetry = Telemetry::new("apigateway", otel_endpoint);

    let logger_provider = telemetry.init_logger();
    telemetry.init_meter();
    telemetry.init_tracer();

    init_logger(logger_provider, "apigateway", is_dev, enable_file_log);

    let config = Config::init().context("Failed to load configuration")?;

    let port = config.port;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down telemetry providers");

    telemetry.shutdown().await?;

    Ok(())
}
