//! Conversational-flow relay configuration.

use std::time::Duration;

use clap::Args;
use feedlens_flow::FlowConfig;

use crate::TRACING_TARGET_CONFIG;

/// Flow relay configuration.
///
/// # Environment Variables
///
/// - `FLOW_BASE_URL` - Base URL of the flow-execution API
/// - `FLOW_ID` - Flow namespace identifier
/// - `FLOW_ENDPOINT_ID` - Endpoint identifier of the flow to run
/// - `FLOW_APPLICATION_TOKEN` - Application token (bearer credential)
/// - `FLOW_TIMEOUT` - Flow request timeout in seconds
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct FlowArgs {
    /// Base URL of the flow-execution API.
    #[arg(long, env = "FLOW_BASE_URL", default_value = feedlens_flow::DEFAULT_BASE_URL)]
    pub flow_base_url: String,

    /// Flow namespace identifier.
    #[arg(long, env = "FLOW_ID")]
    pub flow_id: Option<String>,

    /// Endpoint identifier of the flow to run.
    #[arg(long, env = "FLOW_ENDPOINT_ID")]
    pub flow_endpoint_id: Option<String>,

    /// Application token sent as the bearer credential.
    #[arg(long, env = "FLOW_APPLICATION_TOKEN")]
    pub flow_application_token: Option<String>,

    /// Flow request timeout in seconds.
    #[arg(long, env = "FLOW_TIMEOUT", default_value_t = 60)]
    pub flow_timeout: u64,
}

impl FlowArgs {
    /// Builds the flow client configuration.
    ///
    /// Returns `None` when the flow or endpoint id is absent.
    pub fn to_config(&self) -> Option<FlowConfig> {
        let flow_id = self.flow_id.clone()?;
        let endpoint_id = self.flow_endpoint_id.clone()?;

        let mut config = FlowConfig::new(flow_id, endpoint_id)
            .with_base_url(self.flow_base_url.clone())
            .with_timeout(Duration::from_secs(self.flow_timeout));

        if let Some(token) = &self.flow_application_token {
            config = config.with_application_token(token.clone());
        }

        Some(config)
    }

    /// Logs the configuration at info level (never the token).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            base_url = %self.flow_base_url,
            flow_configured = self.flow_id.is_some() && self.flow_endpoint_id.is_some(),
            token_present = self.flow_application_token.is_some(),
            timeout_secs = self.flow_timeout,
            "flow configuration"
        );
    }
}
