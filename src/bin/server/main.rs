mod config;
mod logging;
mod seed;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use restaurant_ratings::{http, Services};

use crate::config::Config;
use crate::logging::init_logger;
use crate::seed::seed_demo_data;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_logger(config.log_format);

    let services = Arc::new(Services::in_memory());
    if config.seed_demo_data {
        seed_demo_data(&services).context("failed to seed demo data")?;
    }

    let app = http::router(services).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
