//! Full appraisal: every scorer for one domain in a single report

use serde::{Deserialize, Serialize};
use chrono::Utc;
use std::time::Instant;

use crate::domain::DomainName;
use crate::scoring::{
    check_trademark_risk, quick_valuation, score_brandability, score_keyword_demand,
    score_pronounceability,
};
use crate::trend::{apply_trend_boost, compute_trend_boost_at, default_stale_after, TrendEnrichment};
use crate::types::{
    BrandabilityResult, KeywordDemandResult, PronounceabilityResult, QuickValuationResult,
    TrademarkCheck, TrendBoost,
};

/// Everything known about one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    /// Normalized `label.tld`
    pub domain: String,
    pub brandability: BrandabilityResult,
    pub pronounceability: PronounceabilityResult,
    pub trademark: TrademarkCheck,
    /// Keyword demand with any trend boost already applied
    pub keyword_demand: KeywordDemandResult,
    pub trend_boost: TrendBoost,
    pub valuation: QuickValuationResult,
}

/// Appraise a domain using the built-in heuristics only
pub fn appraise(domain: &str) -> DomainReport {
    appraise_with_trends(domain, None)
}

/// Appraise a domain, blending in a trend snapshot when one is available
pub fn appraise_with_trends(domain: &str, enrichment: Option<&TrendEnrichment>) -> DomainReport {
    appraise_with_trend_window(domain, enrichment, default_stale_after())
}

/// Like [`appraise_with_trends`], treating snapshots older than `stale_after` as stale
pub fn appraise_with_trend_window(
    domain: &str,
    enrichment: Option<&TrendEnrichment>,
    stale_after: chrono::Duration,
) -> DomainReport {
    let start = Instant::now();
    let name = DomainName::parse(domain);

    let pronounceability = score_pronounceability(domain);
    let brandability = score_brandability(domain);
    let trademark = check_trademark_risk(domain);

    let base_demand = score_keyword_demand(domain);
    let trend_boost = compute_trend_boost_at(
        &base_demand.words,
        &base_demand.niche.niche,
        enrichment,
        Utc::now(),
        stale_after,
    );
    let keyword_demand = apply_trend_boost(&base_demand, &trend_boost);

    let valuation = quick_valuation(domain, Some(pronounceability.score));

    tracing::debug!(
        domain = %name,
        brandability = brandability.overall,
        demand = keyword_demand.score,
        trend_boost = trend_boost.boost,
        value = %valuation.band,
        duration_ms = %start.elapsed().as_millis(),
        "domain appraised"
    );

    DomainReport {
        domain: name.display(),
        brandability,
        pronounceability,
        trademark,
        keyword_demand,
        trend_boost,
        valuation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::HotNiche;

    #[test]
    fn test_report_bundles_scorers() {
        let report = appraise("https://www.Crypto.AI/");
        assert_eq!(report.domain, "crypto.ai");
        assert_eq!(report.keyword_demand, score_keyword_demand("crypto.ai"));
        assert_eq!(report.trend_boost, TrendBoost::default());
        assert_eq!(
            report.valuation,
            quick_valuation("crypto.ai", Some(report.pronounceability.score))
        );
    }

    fn crypto_snapshot(generated_at: chrono::DateTime<Utc>) -> TrendEnrichment {
        TrendEnrichment {
            keywords: [("crypto".to_string(), 1.6)].into_iter().collect(),
            hot_niches: vec![HotNiche {
                niche: "crypto".to_string(),
                label: "Crypto".to_string(),
                heat: 65.0,
                emerging_keywords: Vec::new(),
            }],
            market_signals: Vec::new(),
            generated_at,
            stale: false,
        }
    }

    #[test]
    fn test_report_with_trends() {
        let snapshot = crypto_snapshot(Utc::now());
        let report = appraise_with_trends("crypto.ai", Some(&snapshot));
        // heat 1.6 -> +5, niche heat 65 -> +2
        assert_eq!(report.trend_boost.boost, 7);
        assert_eq!(report.keyword_demand.score, 58);
    }

    #[test]
    fn test_report_honors_stale_window() {
        let snapshot = crypto_snapshot(Utc::now() - chrono::Duration::hours(30));

        let default_window = appraise_with_trends("crypto.ai", Some(&snapshot));
        assert_eq!(default_window.trend_boost.boost, 3);
        assert_eq!(default_window.keyword_demand.score, 54);

        let wide = appraise_with_trend_window("crypto.ai", Some(&snapshot), chrono::Duration::hours(48));
        assert_eq!(wide.trend_boost.boost, 7);
        assert_eq!(wide.keyword_demand.score, 58);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(appraise("cloudpower.com")).unwrap();
        assert!(json.get("keywordDemand").is_some());
        assert!(json["brandability"].get("trademarkRisk").is_some());
        assert!(json["valuation"].get("valueMin").is_some());
        assert!(json["keywordDemand"].get("trendingKeywords").is_some());
    }

    #[test]
    fn test_garbage_input() {
        let report = appraise("");
        assert_eq!(report.brandability.overall, 0);
        assert!(report.keyword_demand.score >= 1);
    }
}
