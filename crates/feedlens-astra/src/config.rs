//! Data API client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{AstraError, AstraResult};

/// Default keyspace for collections.
pub const DEFAULT_KEYSPACE: &str = "default_keyspace";

/// Default timeout for Data API requests. Bulk inserts are unbounded in
/// size, so this is intentionally generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the Data API client.
#[derive(Debug, Clone)]
#[must_use = "config does nothing unless you use it"]
pub struct AstraConfig {
    /// Database API endpoint URL.
    pub api_endpoint: String,
    /// Bearer-style application token.
    pub token: String,
    /// Keyspace holding the target collections.
    pub keyspace: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl AstraConfig {
    /// Creates a configuration for the given endpoint and token.
    pub fn new(api_endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            token: token.into(),
            keyspace: DEFAULT_KEYSPACE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the keyspace.
    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = keyspace.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Fails if the endpoint is not a valid URL or the token or keyspace
    /// is empty.
    pub fn validate(&self) -> AstraResult<()> {
        Url::parse(&self.api_endpoint)
            .map_err(|err| AstraError::invalid_config(format!("invalid API endpoint: {err}")))?;
        if self.token.is_empty() {
            return Err(AstraError::invalid_config("token must not be empty"));
        }
        if self.keyspace.is_empty() {
            return Err(AstraError::invalid_config("keyspace must not be empty"));
        }
        Ok(())
    }

    /// Returns the command URL for the named collection.
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/api/json/v1/{}/{}",
            self.api_endpoint.trim_end_matches('/'),
            self.keyspace,
            collection
        )
    }
}
