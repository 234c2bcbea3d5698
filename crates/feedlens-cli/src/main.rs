#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use feedlens_server::AppState;
use tower_http::trace::TraceLayer;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "feedlens_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "feedlens_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "feedlens_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.validate().context("invalid configuration")?;
    cli.log();

    let state = cli
        .build_state()
        .context("failed to create application state")?;
    let router = create_router(state, &cli);

    server::serve(router, &cli.server).await?;

    Ok(())
}

/// Creates the router with middleware layers applied.
///
/// Layers are applied in reverse order (last added = outermost): CORS on
/// the outside, request tracing within, routes innermost.
fn create_router(state: AppState, cli: &Cli) -> Router {
    feedlens_server::handler::routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cli.server.cors_layer())
}
