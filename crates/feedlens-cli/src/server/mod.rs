//! HTTP server startup and graceful shutdown.

mod shutdown;

use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use self::shutdown::shutdown_signal;
use crate::config::ServerConfig;
use crate::{TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP};

/// Starts the HTTP server with graceful shutdown.
///
/// Binds to the configured address and serves requests until a shutdown
/// signal arrives; in-flight requests are allowed to complete.
pub async fn serve(router: Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.server_addr();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %addr,
        "Server is ready and listening for connections"
    );

    if config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(Duration::from_secs(config.shutdown_timeout)))
        .await
        .context("server error")?;

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Server shut down gracefully");

    Ok(())
}
