use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hospital_api::config::{self, ServerConfig};
use hospital_api::{api_router, AppState};
use hospital_core::SessionProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServerConfig::from_env()?;
    let sessions = SessionProvider::open(&config.database_path).with_context(|| {
        format!("Failed to open database {}", config.database_path.display())
    })?;

    let sessions_path = sessions.path().to_path_buf();
    let app = api_router(AppState::new(sessions));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(
        addr = %config.bind_addr,
        database = %sessions_path.display(),
        "API server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server failed")?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
