//! Domain name normalization shared by all scorers.
//!
//! Every scorer goes through [`DomainName::parse`], so `Example.COM`,
//! `www.example.com` and `https://example.com/path` all score identically.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9+.-]*://").expect("scheme pattern compiles"));

/// A normalized domain split into its lexical parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainName {
    /// Input as given
    pub raw: String,
    /// Lowercased host with scheme, path and `www.` removed
    pub host: String,
    /// Everything before the first dot (may contain hyphens and digits)
    pub label: String,
    /// Alphabetic-only form of the label used for lexical analysis
    pub cleaned: String,
    /// Text after the last dot, without the dot; empty when there is none
    pub tld: String,
}

impl DomainName {
    /// Normalize any input string. Never fails; garbage yields empty parts.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        let without_scheme = SCHEME.replace(&lowered, "");
        let host = without_scheme
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('.');
        let host = host.strip_prefix("www.").unwrap_or(host).to_string();

        let (label, tld) = match host.find('.') {
            Some(first_dot) => {
                let tld = host.rsplit('.').next().unwrap_or_default();
                (host[..first_dot].to_string(), tld.to_string())
            }
            None => (host.clone(), String::new()),
        };

        let cleaned: String = label.chars().filter(|c| c.is_ascii_lowercase()).collect();

        Self {
            raw: raw.to_string(),
            host,
            label,
            cleaned,
            tld,
        }
    }

    /// Whether there is anything left to analyse
    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }

    pub fn has_hyphen(&self) -> bool {
        self.label.contains('-')
    }

    pub fn has_digit(&self) -> bool {
        self.label.chars().any(|c| c.is_ascii_digit())
    }

    /// Label with hyphens removed, as compared against brand names
    pub fn compact(&self) -> String {
        self.label.replace('-', "")
    }

    /// Character length of the label
    pub fn len(&self) -> usize {
        self.label.chars().count()
    }

    /// `label.tld`, or just the label when there is no TLD
    pub fn display(&self) -> String {
        if self.tld.is_empty() {
            self.label.clone()
        } else {
            format!("{}.{}", self.label, self.tld)
        }
    }
}

impl std::fmt::Display for DomainName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
