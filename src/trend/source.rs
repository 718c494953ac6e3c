//! Trend snapshot sources and the caching service in front of them

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::cache::TrendCache;
use super::TrendEnrichment;
use crate::config::TrendConfig;
use crate::error::{AppraiserError, Result};

/// Somewhere the latest trend snapshot can be read from
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Fetch the current snapshot; `Ok(None)` when none has been published
    async fn fetch(&self) -> Result<Option<TrendEnrichment>>;

    /// Short name used in logs
    fn source_name(&self) -> &'static str;
}

/// Cached, single-flight access to a [`TrendSource`].
///
/// Failures never escape: they are logged and reported as "no enrichment".
pub struct TrendService<S: TrendSource> {
    source: S,
    cache: TrendCache,
    refresh: Mutex<()>,
    stale_after: chrono::Duration,
}

impl<S: TrendSource> TrendService<S> {
    pub fn new(source: S, config: &TrendConfig) -> Self {
        Self {
            source,
            cache: TrendCache::new(config.cache_ttl),
            refresh: Mutex::new(()),
            stale_after: config.stale_after,
        }
    }

    /// Latest snapshot, served from cache while fresh.
    ///
    /// Concurrent callers on a miss share one fetch.
    pub async fn fetch_trend_enrichment(&self) -> Option<Arc<TrendEnrichment>> {
        if let Some(hit) = self.cache.get() {
            tracing::debug!(source = self.source.source_name(), "trend cache hit");
            return Some(hit);
        }

        let _guard = self.refresh.lock().await;
        // another caller may have refreshed while we waited
        if let Some(hit) = self.cache.get() {
            return Some(hit);
        }

        let start = Instant::now();
        match self.source.fetch().await {
            Ok(Some(mut snapshot)) => {
                if snapshot.is_stale_at(Utc::now(), self.stale_after) {
                    snapshot.stale = true;
                }
                tracing::info!(
                    source = self.source.source_name(),
                    keywords = %snapshot.keywords.len(),
                    hot_niches = %snapshot.hot_niches.len(),
                    stale = snapshot.stale,
                    duration_ms = %start.elapsed().as_millis(),
                    "trend snapshot refreshed"
                );
                Some(self.cache.refresh(snapshot))
            }
            Ok(None) => {
                tracing::info!(source = self.source.source_name(), "no trend snapshot published");
                None
            }
            Err(e) => {
                tracing::warn!(
                    source = self.source.source_name(),
                    error = %e,
                    transient = e.is_transient(),
                    duration_ms = %start.elapsed().as_millis(),
                    "trend fetch failed, scoring without enrichment"
                );
                None
            }
        }
    }

    /// Drop the cached snapshot so the next call fetches again
    pub fn clear_trend_cache(&self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &TrendCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Age after which a snapshot counts as stale
    pub fn stale_after(&self) -> chrono::Duration {
        self.stale_after
    }
}

/// Parse a stored snapshot.
///
/// Accepts the bare object, a `{"value": ...}` key-value row, or either of
/// those JSON-encoded as a string. `null` means nothing has been published.
pub fn parse_snapshot(text: &str) -> Result<Option<TrendEnrichment>> {
    let mut value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| AppraiserError::parse(e.to_string(), Some(text.to_string())))?;

    loop {
        value = match value {
            serde_json::Value::Null => return Ok(None),
            serde_json::Value::String(inner) => serde_json::from_str(&inner)
                .map_err(|e| AppraiserError::parse(e.to_string(), Some(inner.clone())))?,
            serde_json::Value::Object(mut row)
                if row.contains_key("value") && !row.contains_key("generatedAt") =>
            {
                row.remove("value").unwrap_or(serde_json::Value::Null)
            }
            other => break Ok(Some(serde_json::from_value(other)?)),
        };
    }
}

#[cfg(feature = "http")]
pub use http::HttpTrendSource;

#[cfg(feature = "http")]
mod http {
    use super::*;
    use reqwest::Client;
    use std::time::Duration;
    use tokio::time::timeout;

    /// Reads the snapshot from a key-value HTTP endpoint
    pub struct HttpTrendSource {
        client: Client,
        endpoint: String,
        api_key: Option<String>,
        request_timeout: Duration,
    }

    impl HttpTrendSource {
        pub fn new(endpoint: impl Into<String>, api_key: Option<String>, request_timeout: Duration) -> Result<Self> {
            let client = Client::builder()
                .timeout(request_timeout)
                .user_agent(concat!("domain-appraiser/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| AppraiserError::network(e.to_string(), None, None))?;

            Ok(Self {
                client,
                endpoint: endpoint.into(),
                api_key,
                request_timeout,
            })
        }

        /// Build from configuration; fails when no endpoint is set
        pub fn from_config(config: &TrendConfig) -> Result<Self> {
            let endpoint = config.endpoint.clone().ok_or_else(|| {
                AppraiserError::config(format!("{} is not set", crate::config::ENV_URL))
            })?;
            Self::new(endpoint, config.api_key.clone(), config.request_timeout)
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }

        /// Client timeouts report the configured limit, everything else is a network error
        fn request_error(&self, err: reqwest::Error) -> AppraiserError {
            if err.is_timeout() {
                AppraiserError::timeout("trend snapshot fetch", self.request_timeout.as_secs())
            } else {
                let status_code = err.status().map(|s| s.as_u16());
                AppraiserError::network(err.to_string(), status_code, Some(self.endpoint.clone()))
            }
        }
    }

    #[async_trait]
    impl TrendSource for HttpTrendSource {
        async fn fetch(&self) -> Result<Option<TrendEnrichment>> {
            let mut request = self.client.get(&self.endpoint);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let secs = self.request_timeout.as_secs();
            let response = timeout(self.request_timeout, request.send())
                .await
                .map_err(|_| AppraiserError::timeout("trend snapshot fetch", secs))?
                .map_err(|e| self.request_error(e))?;

            let status = response.status();
            if status.as_u16() == 404 {
                return Ok(None);
            }
            if !status.is_success() {
                let message = match status.as_u16() {
                    401 | 403 => format!("Access denied ({}). Check DOMAIN_TREND_API_KEY", status),
                    429 => "Rate limit exceeded (429)".to_string(),
                    _ => format!("Snapshot request failed with status {}", status),
                };
                return Err(AppraiserError::network(
                    message,
                    Some(status.as_u16()),
                    Some(self.endpoint.clone()),
                ));
            }

            let text = response.text().await.map_err(|e| self.request_error(e))?;
            parse_snapshot(&text)
        }

        fn source_name(&self) -> &'static str {
            "http"
        }
    }
}
