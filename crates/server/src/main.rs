mod api;
mod bootstrap;
mod health;

use std::time::Duration;

use anyhow::Result;
use caliope_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use caliope_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config);
    let drain_window = Duration::from_secs(app.config.server.graceful_shutdown_secs);

    let router = api::router(app.context.clone())
        .merge(health::router(app.context.catalog.clone()));

    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        "caliope-server started"
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        "caliope-server stopping"
    );

    let _ = shutdown_tx.send(());
    match tokio::time::timeout(drain_window, server).await {
        Ok(result) => result??,
        Err(_) => {
            tracing::warn!(
                event_name = "system.server.drain_timeout",
                correlation_id = "shutdown",
                drain_window_secs = app.config.server.graceful_shutdown_secs,
                "open connections did not drain within the shutdown window"
            );
        }
    }

    Ok(())
}
