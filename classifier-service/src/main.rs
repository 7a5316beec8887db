use classifier_service::config::ClassifierConfig;
use classifier_service::models::{Biodegradability, DisposalCatalog, WasteLabel};
use classifier_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ClassifierConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "classifier-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    let catalog = DisposalCatalog::standard();
    tracing::info!(
        classes = ?WasteLabel::ALL,
        biodegradable = ?catalog.labels_with(Biodegradability::Biodegradable),
        non_biodegradable = ?catalog.labels_with(Biodegradability::NonBiodegradable),
        "Starting classifier service"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    if !app.model_loaded() {
        tracing::warn!("Serving without a model; /predict will return errors");
    }

    app.run_until_stopped().await
}
