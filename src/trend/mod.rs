//! Trend enrichment: an externally generated snapshot of keyword and niche
//! heat that nudges keyword demand up or down.
//!
//! The boost is computed separately from the heuristic demand score and added
//! on top of it by [`apply_trend_boost`]; the heuristic itself never changes.

pub mod cache;
pub mod source;

pub use cache::TrendCache;
#[cfg(feature = "http")]
pub use source::HttpTrendSource;
pub use source::{parse_snapshot, TrendService, TrendSource};

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::scoring::demand::{demand_label, score_keyword_demand};
use crate::types::{Grade, KeywordDemandResult, ScoreFactor, TrendBoost};

pub const MIN_BOOST: i32 = -10;
pub const MAX_BOOST: i32 = 15;

/// Snapshot age after which a positive boost is halved
pub const DEFAULT_STALE_AFTER_HOURS: i64 = 24;

/// Heat at which a snapshot keyword counts as trending
const DISCOVERY_MIN_HEAT: f64 = 1.2;
const DISCOVERY_POINTS: i32 = 2;
const DISCOVERY_CAP: i32 = 5;

/// A niche the snapshot reports as hot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotNiche {
    pub niche: String,
    #[serde(default)]
    pub label: String,
    /// 0-100
    pub heat: f64,
    #[serde(default)]
    pub emerging_keywords: Vec<String>,
}

/// Latest AI-generated trend snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendEnrichment {
    /// keyword -> heat multiplier (1.0 - 2.5)
    #[serde(default)]
    pub keywords: BTreeMap<String, f64>,
    #[serde(default)]
    pub hot_niches: Vec<HotNiche>,
    #[serde(default)]
    pub market_signals: Vec<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub stale: bool,
}

impl TrendEnrichment {
    /// Flagged stale, or generated more than `stale_after` before `now`
    pub fn is_stale_at(&self, now: DateTime<Utc>, stale_after: Duration) -> bool {
        self.stale || now.signed_duration_since(self.generated_at) > stale_after
    }

    pub fn heat_of(&self, word: &str) -> Option<f64> {
        self.keywords.get(word).copied()
    }

    pub fn hot_niche(&self, key: &str) -> Option<&HotNiche> {
        self.hot_niches.iter().find(|n| n.niche == key)
    }

    fn is_emerging(&self, word: &str) -> bool {
        self.hot_niches
            .iter()
            .any(|n| n.emerging_keywords.iter().any(|k| k == word))
    }
}

/// Staleness window used when none is configured
pub fn default_stale_after() -> Duration {
    Duration::hours(DEFAULT_STALE_AFTER_HOURS)
}

/// Trend boost as of now, with the default staleness window
pub fn compute_trend_boost<S: AsRef<str>>(
    words: &[S],
    niche_key: &str,
    enrichment: Option<&TrendEnrichment>,
) -> TrendBoost {
    compute_trend_boost_at(words, niche_key, enrichment, Utc::now(), default_stale_after())
}

/// Trend boost with an explicit clock and staleness window.
///
/// A snapshot older than `stale_after` at `now` has a positive boost halved.
/// The factors always sum to the returned boost, including any clamp.
pub fn compute_trend_boost_at<S: AsRef<str>>(
    words: &[S],
    niche_key: &str,
    enrichment: Option<&TrendEnrichment>,
    now: DateTime<Utc>,
    stale_after: Duration,
) -> TrendBoost {
    let Some(enrichment) = enrichment else {
        return TrendBoost::default();
    };
    let lexicon = Lexicon::global();
    let mut factors = Vec::new();

    // Only the hottest word counts; first one wins on equal heat.
    let hottest = words
        .iter()
        .map(|w| w.as_ref())
        .filter_map(|w| enrichment.heat_of(w).map(|h| (w, h)))
        .fold(None, |best: Option<(&str, f64)>, (w, h)| match best {
            Some((_, top)) if top >= h => best,
            _ => Some((w, h)),
        });
    if let Some((word, heat)) = hottest {
        let points = if heat >= 2.0 {
            8
        } else if heat >= 1.5 {
            5
        } else if heat >= 1.2 {
            2
        } else {
            0
        };
        if points > 0 {
            factors.push(ScoreFactor::new(
                "Trend Heat",
                points,
                format!("'{word}' is running hot ({heat:.1}x)"),
            ));
        }
    }

    let mut discovered: Vec<&str> = Vec::new();
    for word in words.iter().map(|w| w.as_ref()) {
        let trending_now = enrichment.heat_of(word).is_some_and(|h| h >= DISCOVERY_MIN_HEAT)
            || enrichment.is_emerging(word);
        if trending_now && !lexicon.is_trending(word) && !discovered.contains(&word) {
            discovered.push(word);
        }
    }
    if !discovered.is_empty() {
        let points = (discovered.len() as i32 * DISCOVERY_POINTS).min(DISCOVERY_CAP);
        factors.push(ScoreFactor::new(
            "Trend Discovery",
            points,
            format!("newly trending: {}", discovered.join(", ")),
        ));
    }

    if let Some(hot) = enrichment.hot_niche(niche_key) {
        let points = if hot.heat >= 80.0 {
            4
        } else if hot.heat >= 60.0 {
            2
        } else if hot.heat < 30.0 {
            -3
        } else {
            0
        };
        if points != 0 {
            let label = if hot.label.is_empty() { &hot.niche } else { &hot.label };
            factors.push(ScoreFactor::new(
                "Niche Heat",
                points,
                format!("{label} heat {:.0}/100", hot.heat),
            ));
        }
    }

    let mut boost: i32 = factors.iter().map(|f| f.points).sum();

    if boost > 0 && enrichment.is_stale_at(now, stale_after) {
        let halved = boost / 2;
        factors.push(ScoreFactor::new(
            "Stale Trend Data",
            halved - boost,
            format!("snapshot from {} is out of date", enrichment.generated_at.format("%Y-%m-%d %H:%M UTC")),
        ));
        boost = halved;
    }

    let clamped = boost.clamp(MIN_BOOST, MAX_BOOST);
    if clamped != boost {
        factors.push(ScoreFactor::new(
            "Trend Cap",
            clamped - boost,
            format!("trend boost limited to {MIN_BOOST}..={MAX_BOOST}"),
        ));
    }

    TrendBoost {
        boost: clamped,
        factors,
    }
}

/// Add a trend boost to a heuristic demand result.
///
/// Toxic results pass through untouched.
pub fn apply_trend_boost(result: &KeywordDemandResult, boost: &TrendBoost) -> KeywordDemandResult {
    if result.is_toxic() || (boost.boost == 0 && boost.factors.is_empty()) {
        return result.clone();
    }

    let score = (result.score as i32 + boost.boost).clamp(1, 100) as u32;
    let mut blended = result.clone();
    blended.score = score;
    blended.grade = Grade::from_score(score);
    blended.label = demand_label(score).to_string();
    blended.factors.extend(boost.factors.iter().cloned());
    blended
}

/// Keyword demand with an optional trend snapshot blended in
pub fn score_keyword_demand_with_trends(
    domain: &str,
    enrichment: Option<&TrendEnrichment>,
) -> KeywordDemandResult {
    let base = score_keyword_demand(domain);
    let boost = compute_trend_boost(&base.words, &base.niche.niche, enrichment);
    apply_trend_boost(&base, &boost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn snapshot(generated_at: DateTime<Utc>) -> TrendEnrichment {
        let mut keywords = BTreeMap::new();
        keywords.insert("ai".to_string(), 2.1);
        keywords.insert("agentic".to_string(), 1.6);
        keywords.insert("robot".to_string(), 1.3);
        TrendEnrichment {
            keywords,
            hot_niches: vec![
                HotNiche {
                    niche: "ai_tech".to_string(),
                    label: "AI".to_string(),
                    heat: 85.0,
                    emerging_keywords: vec!["swarm".to_string()],
                },
                HotNiche {
                    niche: "pets".to_string(),
                    label: String::new(),
                    heat: 20.0,
                    emerging_keywords: Vec::new(),
                },
            ],
            market_signals: vec!["AI infra spend up".to_string()],
            generated_at,
            stale: false,
        }
    }

    #[test]
    fn test_no_enrichment_is_zero() {
        let boost = compute_trend_boost(&["ai", "bot"], "ai_tech", None);
        assert_eq!(boost, TrendBoost::default());
        assert_eq!(boost.boost, 0);
        assert!(boost.factors.is_empty());
    }

    #[test]
    fn test_fresh_boost() {
        let data = snapshot(now());
        let boost = compute_trend_boost_at(&["ai", "robot"], "ai_tech", Some(&data), now(), default_stale_after());
        // heat 2.1 -> 8, niche heat 85 -> 4, no discoveries
        assert_eq!(boost.boost, 12);
        assert_eq!(boost.factors.len(), 2);
    }

    #[test]
    fn test_discovery_capped() {
        let data = snapshot(now());
        let boost = compute_trend_boost_at(&["agentic", "swarm", "agentic"], "general", Some(&data), now(), default_stale_after());
        let discovery = boost.factors.iter().find(|f| f.label == "Trend Discovery").map(|f| f.points);
        assert_eq!(discovery, Some(4));
        // agentic heat 1.6 -> 5
        assert_eq!(boost.boost, 9);
    }

    #[test]
    fn test_stale_halves_positive_boost() {
        let data = snapshot(now() - Duration::hours(30));
        let boost = compute_trend_boost_at(&["ai", "robot"], "ai_tech", Some(&data), now(), default_stale_after());
        assert_eq!(boost.boost, 6);
        assert!(boost.factors.iter().any(|f| f.label == "Stale Trend Data" && f.points == -6));

        let mut flagged = snapshot(now());
        flagged.stale = true;
        assert_eq!(compute_trend_boost_at(&["ai"], "other", Some(&flagged), now(), default_stale_after()).boost, 4);
    }

    #[test]
    fn test_stale_keeps_negative_boost() {
        let data = snapshot(now() - Duration::hours(48));
        let boost = compute_trend_boost_at(&["dog"], "pets", Some(&data), now(), default_stale_after());
        assert_eq!(boost.boost, -3);
        assert!(!boost.factors.iter().any(|f| f.label == "Stale Trend Data"));
    }

    #[test]
    fn test_configured_window_decides_staleness() {
        let data = snapshot(now() - Duration::hours(30));
        let wide = compute_trend_boost_at(&["ai", "robot"], "ai_tech", Some(&data), now(), Duration::hours(48));
        assert_eq!(wide.boost, 12);
        assert!(!wide.factors.iter().any(|f| f.label == "Stale Trend Data"));

        let narrow = compute_trend_boost_at(&["ai", "robot"], "ai_tech", Some(&data), now(), Duration::hours(6));
        assert_eq!(narrow.boost, 6);
    }

    #[test]
    fn test_boost_clamped() {
        let mut data = snapshot(now());
        data.keywords.insert("zap".to_string(), 2.4);
        data.keywords.insert("zip".to_string(), 2.4);
        data.keywords.insert("zoom".to_string(), 2.4);
        let boost = compute_trend_boost_at(&["zap", "zip", "zoom"], "ai_tech", Some(&data), now(), default_stale_after());
        assert_eq!(boost.boost, MAX_BOOST);
        // 8 heat + 5 discovery + 4 niche, trimmed by the cap
        assert!(boost.factors.iter().any(|f| f.label == "Trend Cap" && f.points == -2));
        assert_eq!(boost.factors.iter().map(|f| f.points).sum::<i32>(), boost.boost);
    }

    #[test]
    fn test_same_input_same_boost() {
        let data = snapshot(now());
        let a = compute_trend_boost_at(&["ai"], "ai_tech", Some(&data), now(), default_stale_after());
        let b = compute_trend_boost_at(&["ai"], "ai_tech", Some(&data), now(), default_stale_after());
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_boost_regrades() {
        let base = score_keyword_demand("ai.com");
        assert_eq!(base.score, 66);
        let boost = TrendBoost {
            boost: 6,
            factors: vec![ScoreFactor::new("Trend Heat", 6, "test")],
        };
        let blended = apply_trend_boost(&base, &boost);
        assert_eq!(blended.score, 72);
        assert_eq!(blended.grade, Grade::A);
        assert!(blended.label.contains("Strong"));
        assert_eq!(blended.factors.len(), base.factors.len() + 1);
        // the heuristic result is untouched
        assert_eq!(base.score, 66);
    }

    #[test]
    fn test_toxic_never_lifted() {
        let base = score_keyword_demand("aiporn.com");
        let boost = TrendBoost {
            boost: 15,
            factors: vec![ScoreFactor::new("Trend Heat", 15, "test")],
        };
        assert_eq!(apply_trend_boost(&base, &boost), base);
    }

    #[test]
    fn test_blend_end_to_end() {
        let data = snapshot(Utc::now());
        let blended = score_keyword_demand_with_trends("ai.com", Some(&data));
        // +8 heat, +4 niche
        assert_eq!(blended.score, 78);
        assert_eq!(score_keyword_demand_with_trends("ai.com", None), score_keyword_demand("ai.com"));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = r#"{
            "keywords": {"ai": 2.0},
            "hotNiches": [{"niche": "ai_tech", "label": "AI", "heat": 90}],
            "marketSignals": [],
            "generatedAt": "2025-06-01T00:00:00Z"
        }"#;
        let data: TrendEnrichment = serde_json::from_str(json).unwrap();
        assert!(!data.stale);
        assert!(data.hot_niches[0].emerging_keywords.is_empty());
        assert_eq!(data.heat_of("ai"), Some(2.0));
    }
}
