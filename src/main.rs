use std::sync::Arc;
use tech_jobs::config::AppConfig;
use tech_jobs::query::QueryEngine;
use tech_jobs::query::handlers::router;
use tech_jobs::store::JobStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tech_jobs=info")),
        )
        .init();

    let config = AppConfig::load()?;

    // 1. Data store (lazy):
    let store = Arc::new(JobStore::with_source(config.job_source()));
    tracing::info!("Job data source: {}", store.source_name());

    if config.eager_load {
        let dataset = store.ensure_loaded().await?;
        tracing::info!("Eager load complete: {} jobs", dataset.len());
    }

    // 2. Query layer:
    let engine = Arc::new(QueryEngine::new(store));

    // 3. HTTP server:
    let app = router(engine);

    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
