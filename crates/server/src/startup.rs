use std::sync::Arc;

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat};
use service::mail::{MailRepository, MailStore};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the mail store at `mail_db_path` and build the router on top of it.
pub async fn build_app(mail_db_path: &str) -> anyhow::Result<Router> {
    common::env::ensure_data_dir(mail_db_path).await?;
    let store = MailStore::new(mail_db_path).await?;
    let repo: Arc<dyn MailRepository> = store;
    Ok(routes::build_router(ServerState::new(repo), build_cors()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Build the app from an already loaded config and serve it
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg.storage.mail_db_path).await?;

    let addr = cfg.server.bind_addr()?;
    info!(%addr, mail_db = %cfg.storage.mail_db_path, "starting mail server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
