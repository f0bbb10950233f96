use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use usersearch_core::Config;
use usersearch_server::{api, dataset, SearchServer};

mod telemetry;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let (config, load_error) = match Config::load("config.json") {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = telemetry::init_telemetry(&config.log_dir)?;

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Failed to load config.json, using defaults");
    }

    tracing::info!("usersearch-server starting");
    tracing::info!("  Dataset: {}", config.dataset_path);
    tracing::info!("  Port: {}", config.port);

    let records = dataset::load(&config.dataset_path)
        .with_context(|| format!("Cannot start without dataset {}", config.dataset_path))?;
    let app_state = web::Data::new(api::AppState {
        server: Arc::new(SearchServer::new(records)),
    });

    let bind_addr = config.bind_addr();
    tracing::info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            .configure(api::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
