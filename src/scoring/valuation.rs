//! Quick valuation: bucketed points mapped onto fixed dollar tiers.

use std::time::Instant;

use super::pronounce::{has_hard_cluster, is_balanced, vowel_ratio};
use super::segment::segment;
use super::trademark::check_name;
use crate::domain::DomainName;
use crate::lexicon::Lexicon;
use crate::types::{QuickValuationResult, TrademarkRisk};

/// Highest raw total the buckets can produce
const RAW_MAX: f64 = 115.0;

const TRENDING_CAP: u32 = 15;
const TRENDING_POINTS_PER_HEAT: f64 = 7.0;

/// Pre-tier scaling for names containing a brand
const MEDIUM_TRADEMARK_FACTOR: f64 = 0.6;

/// Valuation ranges never span more than this ratio
const MAX_RANGE_RATIO: u64 = 3;

/// A dollar range for a band of normalized scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueTier {
    /// Lowest normalized score in the tier
    pub min_score: u32,
    pub min: u64,
    pub max: u64,
}

/// Floor tier forced by an exact brand match or a toxic keyword
pub const FLOOR_TIER: ValueTier = ValueTier { min_score: 0, min: 5, max: 15 };

/// Score tiers, highest first
pub const VALUE_TIERS: &[ValueTier] = &[
    ValueTier { min_score: 92, min: 40_000, max: 120_000 },
    ValueTier { min_score: 85, min: 15_000, max: 40_000 },
    ValueTier { min_score: 78, min: 6_000, max: 15_000 },
    ValueTier { min_score: 70, min: 2_500, max: 6_000 },
    ValueTier { min_score: 62, min: 1_000, max: 2_500 },
    ValueTier { min_score: 55, min: 400, max: 1_000 },
    ValueTier { min_score: 45, min: 150, max: 400 },
    ValueTier { min_score: 35, min: 50, max: 150 },
    ValueTier { min_score: 0, min: 10, max: 50 },
];

/// Tier for a normalized score
pub fn tier_for(score: u32) -> ValueTier {
    VALUE_TIERS
        .iter()
        .copied()
        .find(|t| score >= t.min_score)
        .unwrap_or(FLOOR_TIER)
}

/// Estimate a resale price band for a domain.
///
/// `pronounce_score` is an optional pre-computed pronounceability score worth
/// up to five bonus points.
pub fn quick_valuation(domain: &str, pronounce_score: Option<u32>) -> QuickValuationResult {
    let start = Instant::now();
    let name = DomainName::parse(domain);
    let lexicon = Lexicon::global();
    let segmentation = segment(&name.cleaned);
    let penalty = lexicon.find_penalty(&name.cleaned).is_some();
    let trademark = check_name(&name.compact());

    let max_heat = segmentation
        .words
        .iter()
        .filter_map(|w| lexicon.trending_weight(w))
        .fold(0.0_f64, f64::max);

    let length_points = match name.len() {
        0 => 0,
        1..=2 => 20,
        3 => 19,
        4 => 17,
        5 => 15,
        6 => 13,
        7 => 11,
        8 => 9,
        9..=10 => 7,
        11..=12 => 5,
        13..=15 => 3,
        _ => 1,
    };

    let tld_points = lexicon.tld_profile(&name.tld).value_points;

    let word_points = if penalty {
        0
    } else if name.cleaned.len() <= 3 {
        if segmentation.is_single_word() { 20 } else { 5 }
    } else if segmentation.is_single_word() {
        25
    } else if segmentation.is_full_compound() {
        match segmentation.word_count() {
            2 => 20,
            3 => 16,
            _ => 12,
        }
    } else {
        (segmentation.coverage() * 15.0).round() as u32
    };

    let brand_points = brand_proxy(&name);
    let mix_points = character_mix(&name);
    let trending_points = ((max_heat * TRENDING_POINTS_PER_HEAT).round() as u32).min(TRENDING_CAP);
    let pronounce_points = match pronounce_score {
        Some(s) if s >= 80 => 5,
        Some(s) if s >= 65 => 3,
        Some(s) if s >= 50 => 1,
        _ => 0,
    };

    let mut raw = (length_points
        + tld_points
        + word_points
        + brand_points
        + mix_points
        + trending_points
        + pronounce_points) as f64;
    if trademark.risk_level == TrademarkRisk::Medium {
        raw *= MEDIUM_TRADEMARK_FACTOR;
    }
    let score = (raw / RAW_MAX * 100.0).round().clamp(0.0, 100.0) as u32;

    let (value_min, value_max) = if penalty || trademark.risk_level == TrademarkRisk::High {
        (FLOOR_TIER.min, FLOOR_TIER.max)
    } else {
        let tier = tier_for(score);
        let (mut min, mut max) = (tier.min, tier.max);

        if max_heat > 0.0 {
            let multiplier = 1.0 + (max_heat - 1.0) * 0.5;
            min = (min as f64 * multiplier).round() as u64;
            max = (max as f64 * multiplier).round() as u64;
        }

        if let Some(factor) = dictionary_com_factor(lexicon, &name) {
            min = min.max((2_000.0 * factor).round() as u64);
            max = max.max((5_000.0 * factor).round() as u64);
        }

        (min, max.min(min * MAX_RANGE_RATIO))
    };

    tracing::debug!(
        domain = %name,
        score,
        value_min,
        value_max,
        duration_ms = %start.elapsed().as_millis(),
        "valuation computed"
    );

    QuickValuationResult {
        band: format_band(value_min, value_max),
        score,
        value_min,
        value_max,
    }
}

fn brand_proxy(name: &DomainName) -> u32 {
    let cleaned = &name.cleaned;
    let mut points = 0;

    if !cleaned.is_empty() {
        if is_balanced(vowel_ratio(cleaned)) {
            points += 5;
        }
        if !has_hard_cluster(cleaned) {
            points += 5;
        }
    }
    if !name.has_hyphen() && !name.has_digit() {
        points += 5;
    }
    points
}

fn character_mix(name: &DomainName) -> u32 {
    let has_alpha = !name.cleaned.is_empty();
    match (name.has_hyphen(), name.has_digit(), has_alpha) {
        (false, false, true) => 10,
        (false, true, false) => 6,
        (false, true, true) => 4,
        (true, false, _) => 2,
        (true, true, _) => 1,
        (false, false, false) => 0,
    }
}

/// Floor multiplier for a single dictionary word on `.com`
fn dictionary_com_factor(lexicon: &Lexicon, name: &DomainName) -> Option<f64> {
    if name.tld != "com"
        || name.has_hyphen()
        || name.has_digit()
        || !lexicon.is_dictionary_word(&name.cleaned)
    {
        return None;
    }
    Some(match name.cleaned.len() {
        0..=4 => 3.0,
        5..=6 => 2.0,
        _ => 1.5,
    })
}

/// `$7,500 – $18,750`
pub fn format_band(min: u64, max: u64) -> String {
    format!("${} – ${}", with_thousands(min), with_thousands(max))
}

fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_ai() {
        let result = quick_valuation("crypto.ai", None);
        assert_eq!(result.score, 83);
        assert_eq!(result.value_min, 7_500);
        assert_eq!(result.value_max, 18_750);
        assert_eq!(result.band, "$7,500 – $18,750");
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for(100).min, 40_000);
        assert_eq!(tier_for(92).min, 40_000);
        assert_eq!(tier_for(91).min, 15_000);
        assert_eq!(tier_for(78).max, 15_000);
        assert_eq!(tier_for(62).min, 1_000);
        assert_eq!(tier_for(35).min, 50);
        assert_eq!(tier_for(34).min, 10);
        assert_eq!(tier_for(0).max, 50);
    }

    #[test]
    fn test_range_capped_at_three_times() {
        for domain in ["ai.com", "crypto.ai", "x.info", "cloud-9.biz", "power.com", "navigate.com"] {
            let result = quick_valuation(domain, Some(90));
            assert!(result.value_max <= result.value_min * 3, "{domain}");
            assert!(result.value_min > 0);
        }
    }

    #[test]
    fn test_exact_brand_forces_floor() {
        let result = quick_valuation("google.com", Some(100));
        assert_eq!((result.value_min, result.value_max), (5, 15));
    }

    #[test]
    fn test_penalty_forces_floor() {
        let result = quick_valuation("buyviagra.com", None);
        assert_eq!((result.value_min, result.value_max), (5, 15));
    }

    #[test]
    fn test_dictionary_com_floor() {
        let result = quick_valuation("power.com", None);
        assert!(result.value_min >= 4_000);
        assert!(result.value_max >= 10_000);
    }

    #[test]
    fn test_pronounce_bonus_never_lowers() {
        let without = quick_valuation("navigate.io", None);
        let with = quick_valuation("navigate.io", Some(95));
        assert!(with.score >= without.score);
    }

    #[test]
    fn test_empty_input() {
        let result = quick_valuation("", None);
        assert!(result.score <= 100);
        assert!(result.value_max <= result.value_min * 3);
    }

    #[test]
    fn test_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1_000), "1,000");
        assert_eq!(with_thousands(120_000), "120,000");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
        assert_eq!(format_band(50, 150), "$50 – $150");
    }
}
