//! CLI configuration management.
//!
//! The complete configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig  # Host, port, shutdown, CORS
//! ├── flow: FlowArgs        # Conversational-flow relay endpoint
//! └── astra: AstraArgs      # Data API endpoint and collection
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.

mod astra;
mod flow;
mod server;

use std::process;
use std::sync::Arc;

use anyhow::Context;
pub use astra::AstraArgs;
use clap::Parser;
use feedlens_astra::AstraClient;
use feedlens_flow::FlowClient;
use feedlens_server::AppState;
pub use flow::FlowArgs;
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "feedlens")]
#[command(about = "Feedlens social-feed analysis dashboard backend")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Conversational-flow relay configuration.
    #[clap(flatten)]
    pub flow: FlowArgs,

    /// Data API configuration.
    #[clap(flatten)]
    pub astra: AstraArgs,
}

impl Cli {
    /// Loads environment variables from a `.env` file and parses CLI
    /// arguments.
    ///
    /// The `.env` file is loaded before clap parses arguments so its
    /// values can serve as defaults for `env`-backed options.
    pub fn init() -> Self {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
        Self::parse()
    }

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        Ok(())
    }

    /// Logs build information and configuration (never secrets).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            "starting feedlens server"
        );

        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            "build information"
        );

        self.server.log();
        self.flow.log();
        self.astra.log();
    }

    /// Builds the application state from the configured collaborators.
    ///
    /// Absent flow or Data API configuration leaves the corresponding
    /// collaborator unset; its operations then report validation errors
    /// at the action boundary instead of failing startup.
    pub fn build_state(&self) -> anyhow::Result<AppState> {
        let mut state = AppState::new();

        if let Some(config) = self.flow.to_config() {
            let client = FlowClient::new(config).context("failed to create flow client")?;
            state = state.with_relay(Arc::new(client));
        } else {
            tracing::warn!(
                target: TRACING_TARGET_CONFIG,
                "flow relay not configured; chat operations will report validation errors"
            );
        }

        if let Some(config) = self.astra.to_config() {
            let client = AstraClient::new(config).context("failed to create Data API client")?;
            state = state.with_sink(Arc::new(client));
        } else {
            tracing::warn!(
                target: TRACING_TARGET_CONFIG,
                "Data API not configured; ingest operations will report validation errors"
            );
        }

        if let Some(collection) = &self.astra.astra_collection {
            state = state.with_default_collection(collection.clone());
        }

        Ok(state)
    }
}
