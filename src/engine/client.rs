// file: src/engine/client.rs
// description: HTTP client for the article search engine with connection config
// reference: https://docs.rs/reqwest

use crate::config::EngineConfig;
use crate::engine::query::StructuredQuery;
use crate::error::{Result, SearchError};
use crate::models::Article;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

/// Capability interface to the search engine. The engine is a black box:
/// callers hand it a structured query and trust the returned hit order as the
/// authoritative relevance ranking. Tests substitute a fake implementation.
pub trait SearchEngine: Send + Sync {
    /// Execute one query and return the matched articles in engine order.
    fn search(
        &self,
        query: &StructuredQuery,
    ) -> impl Future<Output = Result<Vec<Article>>> + Send;

    /// Cheap reachability check against the engine endpoint.
    fn ping(&self) -> impl Future<Output = Result<bool>> + Send;
}

#[derive(Debug, Deserialize)]
struct EngineResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: Article,
}

/// Engine client over HTTP with basic auth. Credentials and endpoint come
/// from [`EngineConfig`] at construction; the request timeout is enforced by
/// the underlying client so a hung engine surfaces as a failure rather than
/// an empty result set.
#[derive(Clone)]
pub struct HttpEngineClient {
    client: Client,
    config: EngineConfig,
}

impl HttpEngineClient {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                SearchError::Config(format!("Failed to build engine HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn collection(&self) -> &str {
        &self.config.collection
    }

    fn search_url(&self, collection: &str) -> String {
        format!("{}/{}/_search", self.config.url.trim_end_matches('/'), collection)
    }

    fn map_send_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::EngineTimeout {
                seconds: self.config.timeout_secs,
            }
        } else {
            SearchError::EngineUnavailable(err.to_string())
        }
    }
}

impl SearchEngine for HttpEngineClient {
    async fn search(&self, query: &StructuredQuery) -> Result<Vec<Article>> {
        let url = self.search_url(&query.collection);

        debug!("Sending query to engine at {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&query.body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Engine query failed with status {}: {}", status, error_text);
            return Err(SearchError::EngineUnavailable(format!(
                "engine returned status {}: {}",
                status, error_text
            )));
        }

        let parsed: EngineResponse = response
            .json()
            .await
            .map_err(|e| SearchError::EngineResponse(e.to_string()))?;

        let articles: Vec<Article> = parsed
            .hits
            .hits
            .into_iter()
            .map(|hit| hit.source)
            .collect();

        info!("Engine returned {} hits", articles.len());
        Ok(articles)
    }

    async fn ping(&self) -> Result<bool> {
        debug!("Checking engine reachability at {}", self.config.url);

        let response = self
            .client
            .get(self.config.url.trim_end_matches('/'))
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if response.status().is_success() {
            info!("Engine reachable");
            Ok(true)
        } else {
            Err(SearchError::EngineUnavailable(format!(
                "engine ping returned status {}",
                response.status()
            )))
        }
    }
}
