use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use people_api::modules::people::adapters::outbound::store_in_memory::InMemoryPersonStore;
use people_api::modules::people::adapters::outbound::store_postgres::PostgresPersonStore;
use people_api::modules::people::core::ports::PersonStore;
use people_api::shell::config::{Config, StoreBackend};
use people_api::shell::http::router;
use people_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store: Arc<dyn PersonStore> = match config.backend {
        StoreBackend::Memory => Arc::new(InMemoryPersonStore::new(config.memory_store_latency)),
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required when STORE_BACKEND=postgres")?;
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(url)
                .await
                .context("failed to create postgres connection pool")?;
            Arc::new(PostgresPersonStore::new(pool))
        }
    };

    let state = AppState {
        store,
        request_timeout: config.request_timeout,
    };
    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
