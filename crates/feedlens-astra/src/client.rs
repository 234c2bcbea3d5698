//! Data API client.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use feedlens_core::DocumentSink;
use feedlens_core::types::Document;
use serde_json::json;

use crate::TRACING_TARGET;
use crate::config::AstraConfig;
use crate::error::{AstraError, AstraResult};
use crate::response::{CommandResponse, InsertManyResult};

/// Maximum number of response-body characters kept in error messages.
const BODY_SNIPPET_LEN: usize = 1024;

struct AstraClientInner {
    http: reqwest::Client,
    config: AstraConfig,
}

/// Client for the remote document collection.
///
/// Cheap to clone; the HTTP client and configuration live behind an `Arc`.
#[derive(Clone)]
pub struct AstraClient {
    inner: Arc<AstraClientInner>,
}

impl AstraClient {
    /// Creates a new Data API client from a configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: AstraConfig) -> AstraResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("feedlens/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!(
            target: TRACING_TARGET,
            api_endpoint = %config.api_endpoint,
            keyspace = %config.keyspace,
            "Data API client created"
        );

        Ok(Self {
            inner: Arc::new(AstraClientInner { http, config }),
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &AstraConfig {
        &self.inner.config
    }

    /// Inserts documents into the named collection in one batch.
    ///
    /// Batch size is unbounded; the documents are sent as a single
    /// `insertMany` command.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success statuses fail the call, as does
    /// a response carrying Data API command errors. There is no retry.
    pub async fn insert_many(
        &self,
        collection: &str,
        documents: &[Document],
    ) -> AstraResult<InsertManyResult> {
        let url = self.inner.config.collection_url(collection);
        let body = json!({"insertMany": {"documents": documents}});

        tracing::debug!(
            target: TRACING_TARGET,
            collection = %collection,
            count = documents.len(),
            "Inserting documents"
        );

        let response = self
            .inner
            .http
            .post(&url)
            .header("Token", &self.inner.config.token)
            .json(&body)
            .send()
            .await
            .inspect_err(|err| {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %err,
                    timed_out = err.is_timeout(),
                    "Data API request failed"
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
                "Data API returned an error status"
            );
            return Err(AstraError::status(status.as_u16(), body));
        }

        let envelope: CommandResponse = response.json().await?;

        if let Some(first) = envelope.errors.first() {
            return Err(AstraError::api(first.message.clone()));
        }

        let inserted_ids = envelope
            .status
            .map(|status| status.inserted_ids)
            .ok_or_else(|| AstraError::api("response carried no insert status"))?;

        tracing::info!(
            target: TRACING_TARGET,
            collection = %collection,
            inserted = inserted_ids.len(),
            "Documents inserted"
        );

        Ok(InsertManyResult { inserted_ids })
    }
}

impl fmt::Debug for AstraClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstraClient")
            .field("api_endpoint", &self.inner.config.api_endpoint)
            .field("keyspace", &self.inner.config.keyspace)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DocumentSink for AstraClient {
    async fn insert_many(
        &self,
        collection: &str,
        documents: &[Document],
    ) -> feedlens_core::Result<usize> {
        let result = AstraClient::insert_many(self, collection, documents).await?;
        Ok(result.inserted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AstraClient::new(AstraConfig::new("https://db.example.com", "token"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let client = AstraClient::new(AstraConfig::new("nope", "token"));
        assert!(matches!(client, Err(AstraError::InvalidConfig(_))));
    }

    #[test]
    fn test_insert_many_body_shape() {
        let documents = vec![Document::new("text")];
        let body = json!({"insertMany": {"documents": documents}});
        assert_eq!(
            body["insertMany"]["documents"][0]["$vectorize"],
            json!("text")
        );
    }
}
