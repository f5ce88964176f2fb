use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use leave_balances::shell::config::AppConfig;
use leave_balances::shell::http::router;
use leave_balances::shell::state::{AppState, load_record_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    tracing::info!(policy = ?config.policy, "leave policy loaded");

    // In-memory store for now
    let store = Arc::new(load_record_store(config.seed_file.as_deref()).await?);
    let app = router(AppState::new(store, config.policy));

    tracing::info!("HTTP endpoint: http://{}", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
