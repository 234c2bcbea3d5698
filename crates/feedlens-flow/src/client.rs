//! Flow run client.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use feedlens_core::{ChatRelay, RelayReply};

use crate::TRACING_TARGET;
use crate::config::FlowConfig;
use crate::error::{FlowError, FlowResult};
use crate::request::RunFlowRequest;
use crate::response::RunFlowResponse;

/// Maximum number of response-body characters kept in error messages.
const BODY_SNIPPET_LEN: usize = 1024;

struct FlowClientInner {
    http: reqwest::Client,
    config: FlowConfig,
}

/// Client for the remote flow-execution endpoint.
///
/// Cheap to clone; the HTTP client and configuration live behind an `Arc`.
#[derive(Clone)]
pub struct FlowClient {
    inner: Arc<FlowClientInner>,
}

impl FlowClient {
    /// Creates a new flow client from a configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: FlowConfig) -> FlowResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("feedlens/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %config.base_url,
            flow_id = %config.flow_id,
            "Flow client created"
        );

        Ok(Self {
            inner: Arc::new(FlowClientInner { http, config }),
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &FlowConfig {
        &self.inner.config
    }

    /// Runs the configured flow with one user message and returns the
    /// extracted reply.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses, and unexpected response
    /// bodies all fail the call; a well-formed response without `outputs`
    /// fails with [`FlowError::MissingOutputs`]. There is no retry.
    pub async fn run_flow(&self, message: &str) -> FlowResult<RelayReply> {
        let url = self.inner.config.run_url();

        tracing::debug!(
            target: TRACING_TARGET,
            url = %url,
            "Relaying chat message"
        );

        let mut request = self
            .inner
            .http
            .post(&url)
            .json(&RunFlowRequest::chat(message));

        if let Some(token) = &self.inner.config.application_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.inspect_err(|err| {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %err,
                timed_out = err.is_timeout(),
                "Flow request failed"
            );
        })?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(BODY_SNIPPET_LEN)
                .collect();
            tracing::warn!(
                target: TRACING_TARGET,
                status = status.as_u16(),
                "Flow run returned an error status"
            );
            return Err(FlowError::status(status.as_u16(), body));
        }

        let raw: serde_json::Value = response.json().await?;
        let parsed: RunFlowResponse = serde_json::from_value(raw.clone())?;
        let text = parsed
            .message_text()
            .ok_or(FlowError::MissingOutputs)?
            .to_owned();

        tracing::debug!(
            target: TRACING_TARGET,
            reply_chars = text.len(),
            "Flow reply received"
        );

        Ok(RelayReply::new(text, raw))
    }
}

impl fmt::Debug for FlowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowClient")
            .field("base_url", &self.inner.config.base_url)
            .field("flow_id", &self.inner.config.flow_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatRelay for FlowClient {
    async fn send(&self, message: &str) -> feedlens_core::Result<RelayReply> {
        self.run_flow(message).await.map_err(Into::into)
    }
}
