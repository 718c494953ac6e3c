//! Trend snapshot configuration loaded from the environment.

use std::env;
use std::time::Duration;

use crate::config_error;
use crate::error::Result;

pub const ENV_URL: &str = "DOMAIN_TREND_URL";
pub const ENV_API_KEY: &str = "DOMAIN_TREND_API_KEY";
pub const ENV_CACHE_TTL: &str = "DOMAIN_TREND_CACHE_TTL_SECS";
pub const ENV_STALE_HOURS: &str = "DOMAIN_TREND_STALE_HOURS";
pub const ENV_TIMEOUT: &str = "DOMAIN_TREND_TIMEOUT_SECS";

/// Where to find the trend snapshot and how long to trust it
#[derive(Debug, Clone, PartialEq)]
pub struct TrendConfig {
    /// Key-value endpoint holding the latest snapshot
    pub endpoint: Option<String>,
    /// Bearer token for the endpoint
    pub api_key: Option<String>,
    /// How long a fetched snapshot is served from memory
    pub cache_ttl: Duration,
    /// Snapshots generated longer ago than this count as stale
    pub stale_after: chrono::Duration,
    pub request_timeout: Duration,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            cache_ttl: Duration::from_secs(600),
            stale_after: crate::trend::default_stale_after(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl TrendConfig {
    /// Read `DOMAIN_TREND_*` variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self {
            endpoint: get(ENV_URL),
            api_key: get(ENV_API_KEY),
            ..Self::default()
        };

        if let Some(raw) = get(ENV_CACHE_TTL) {
            config.cache_ttl = Duration::from_secs(parse_number(ENV_CACHE_TTL, &raw)?);
        }
        if let Some(raw) = get(ENV_STALE_HOURS) {
            let hours = parse_number(ENV_STALE_HOURS, &raw)?;
            config.stale_after = i64::try_from(hours)
                .ok()
                .and_then(chrono::Duration::try_hours)
                .ok_or_else(|| config_error!("{} is too large: {}", ENV_STALE_HOURS, raw))?;
        }
        if let Some(raw) = get(ENV_TIMEOUT) {
            let secs = parse_number(ENV_TIMEOUT, &raw)?;
            if secs == 0 {
                return Err(config_error!("{} must be at least 1", ENV_TIMEOUT));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Whether a remote snapshot source is configured
    pub fn is_remote_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|_| config_error!("{} must be a whole number, got '{}'", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TrendConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TrendConfig::default());
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
        assert_eq!(config.stale_after, chrono::Duration::hours(24));
        assert!(!config.is_remote_enabled());
    }

    #[test]
    fn test_overrides() {
        let config = TrendConfig::from_lookup(lookup(&[
            (ENV_URL, "https://kv.example.com/trends"),
            (ENV_API_KEY, "secret"),
            (ENV_CACHE_TTL, "60"),
            (ENV_STALE_HOURS, "6"),
            (ENV_TIMEOUT, "3"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("https://kv.example.com/trends"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.stale_after, chrono::Duration::hours(6));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(config.is_remote_enabled());
    }

    #[test]
    fn test_blank_is_unset() {
        let config = TrendConfig::from_lookup(lookup(&[(ENV_URL, "  "), (ENV_CACHE_TTL, "")])).unwrap();
        assert!(config.endpoint.is_none());
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = TrendConfig::from_lookup(lookup(&[(ENV_CACHE_TTL, "ten")])).unwrap_err();
        assert!(err.to_string().contains(ENV_CACHE_TTL));
        assert!(TrendConfig::from_lookup(lookup(&[(ENV_STALE_HOURS, "-1")])).is_err());
        assert!(TrendConfig::from_lookup(lookup(&[(ENV_TIMEOUT, "0")])).is_err());
    }
}
