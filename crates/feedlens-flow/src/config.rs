//! Flow client configuration.

use std::time::Duration;

use crate::error::{FlowError, FlowResult};

/// Default base URL of the managed flow-execution API.
pub const DEFAULT_BASE_URL: &str = "https://api.langflow.astra.datastax.com";

/// Default timeout for flow runs. Flow executions can take a while, so
/// this is intentionally generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the flow client.
///
/// Constructed once per session and handed to the client; there is no
/// process-wide configuration state.
#[derive(Debug, Clone)]
#[must_use = "config does nothing unless you use it"]
pub struct FlowConfig {
    /// Base URL of the flow-execution API.
    pub base_url: String,
    /// Flow namespace identifier.
    pub flow_id: String,
    /// Endpoint identifier of the flow to run.
    pub endpoint_id: String,
    /// Application token sent as a bearer credential when present.
    pub application_token: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl FlowConfig {
    /// Creates a configuration for the given flow and endpoint.
    pub fn new(flow_id: impl Into<String>, endpoint_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            flow_id: flow_id.into(),
            endpoint_id: endpoint_id.into(),
            application_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the application token.
    pub fn with_application_token(mut self, token: impl Into<String>) -> Self {
        self.application_token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns true if an application token is configured.
    pub fn has_token(&self) -> bool {
        self.application_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Fails if the base URL, flow id, or endpoint id is empty.
    pub fn validate(&self) -> FlowResult<()> {
        if self.base_url.is_empty() {
            return Err(FlowError::invalid_config("base URL must not be empty"));
        }
        if self.flow_id.is_empty() {
            return Err(FlowError::invalid_config("flow id must not be empty"));
        }
        if self.endpoint_id.is_empty() {
            return Err(FlowError::invalid_config("endpoint id must not be empty"));
        }
        Ok(())
    }

    /// Returns the run URL for this flow.
    pub fn run_url(&self) -> String {
        format!(
            "{}/lf/{}/api/v1/run/{}",
            self.base_url.trim_end_matches('/'),
            self.flow_id,
            self.endpoint_id
        )
    }
}
