//! Data API configuration.

use std::time::Duration;

use clap::Args;
use feedlens_astra::AstraConfig;

use crate::TRACING_TARGET_CONFIG;

/// Data API configuration.
///
/// # Environment Variables
///
/// - `ASTRA_API_ENDPOINT` - Database API endpoint URL
/// - `ASTRA_TOKEN` - Application token for the Data API
/// - `ASTRA_KEYSPACE` - Keyspace holding the target collections
/// - `ASTRA_COLLECTION` - Default target collection for ingests
/// - `ASTRA_TIMEOUT` - Data API request timeout in seconds
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct AstraArgs {
    /// Database API endpoint URL.
    #[arg(long, env = "ASTRA_API_ENDPOINT")]
    pub astra_api_endpoint: Option<String>,

    /// Application token for the Data API.
    #[arg(long, env = "ASTRA_TOKEN")]
    pub astra_token: Option<String>,

    /// Keyspace holding the target collections.
    #[arg(long, env = "ASTRA_KEYSPACE", default_value = feedlens_astra::DEFAULT_KEYSPACE)]
    pub astra_keyspace: String,

    /// Default target collection for ingests.
    #[arg(long, env = "ASTRA_COLLECTION")]
    pub astra_collection: Option<String>,

    /// Data API request timeout in seconds.
    #[arg(long, env = "ASTRA_TIMEOUT", default_value_t = 60)]
    pub astra_timeout: u64,
}

impl AstraArgs {
    /// Builds the Data API client configuration.
    ///
    /// Returns `None` when the endpoint or token is absent.
    pub fn to_config(&self) -> Option<AstraConfig> {
        let api_endpoint = self.astra_api_endpoint.clone()?;
        let token = self.astra_token.clone()?;

        Some(
            AstraConfig::new(api_endpoint, token)
                .with_keyspace(self.astra_keyspace.clone())
                .with_timeout(Duration::from_secs(self.astra_timeout)),
        )
    }

    /// Logs the configuration at info level (never the token).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            endpoint_present = self.astra_api_endpoint.is_some(),
            token_present = self.astra_token.is_some(),
            keyspace = %self.astra_keyspace,
            default_collection = ?self.astra_collection,
            timeout_secs = self.astra_timeout,
            "data api configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AstraArgs {
        AstraArgs {
            astra_api_endpoint: None,
            astra_token: None,
            astra_keyspace: feedlens_astra::DEFAULT_KEYSPACE.to_owned(),
            astra_collection: None,
            astra_timeout: 60,
        }
    }

    #[test]
    fn test_to_config_requires_endpoint_and_token() {
        assert!(args().to_config().is_none());

        let mut complete = args();
        complete.astra_api_endpoint = Some("https://db.example.com".into());
        complete.astra_token = Some("token".into());

        let config = complete.to_config().unwrap();
        assert_eq!(config.keyspace, feedlens_astra::DEFAULT_KEYSPACE);
    }
}
