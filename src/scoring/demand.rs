//! Keyword demand scoring.
//!
//! An additive factor list (TLD, length, trending keywords, combos, dictionary
//! words, premium keywords, niche, hyphens, digits) summed and clamped to
//! 1-100. Any penalty keyword short-circuits to the floor.

use std::collections::HashMap;
use std::time::Instant;

use super::segment::{segment, Segmentation};
use crate::domain::DomainName;
use crate::lexicon::{Lexicon, CATEGORIES};
use crate::types::{Confidence, Grade, KeywordDemandResult, NicheMatch, ScoreFactor};

const MIN_SCORE: i32 = 1;
const MAX_SCORE: i32 = 100;

/// Points per unit of trending heat
const TRENDING_POINTS_PER_HEAT: f64 = 6.0;
const TRENDING_CAP: i32 = 30;

const PREMIUM_POINTS: i32 = 5;
const PREMIUM_CAP: i32 = 10;

/// Score the market demand for a domain's keywords
pub fn score_keyword_demand(domain: &str) -> KeywordDemandResult {
    let start = Instant::now();
    let name = DomainName::parse(domain);
    let lexicon = Lexicon::global();

    if let Some(toxic) = lexicon.find_penalty(&name.cleaned) {
        tracing::debug!(domain = %name, keyword = toxic, "penalty keyword short-circuit");
        return toxic_result(toxic);
    }

    let segmentation = segment(&name.cleaned);
    let mut factors = Vec::new();

    let tld = lexicon.tld_profile(&name.tld);
    factors.push(ScoreFactor::new(
        "TLD Demand",
        tld.demand_points,
        if name.tld.is_empty() {
            "no TLD".to_string()
        } else {
            format!(".{} demand", name.tld)
        },
    ));

    let len = name.len();
    let length_points = match len {
        0 => 0,
        1..=3 => 20,
        4..=5 => 15,
        6..=8 => 10,
        9..=12 => 5,
        _ => 0,
    };
    factors.push(ScoreFactor::new(
        "Length",
        length_points,
        format!("{len} characters"),
    ));

    let trending = trending_words(lexicon, &segmentation);
    if !trending.is_empty() {
        let points: i32 = trending
            .iter()
            .map(|w| {
                let heat = lexicon.trending_weight(w).unwrap_or(1.0);
                (heat * TRENDING_POINTS_PER_HEAT).round() as i32
            })
            .sum();
        factors.push(ScoreFactor::new(
            "Trending Keywords",
            points.min(TRENDING_CAP),
            trending.join(", "),
        ));
    }

    let combo = match trending.len() {
        2 => Some(10),
        n if n >= 3 => Some(15),
        _ => None,
    };
    if let Some(points) = combo {
        factors.push(ScoreFactor::new(
            "Keyword Combo",
            points,
            format!("{} trending keywords together", trending.len()),
        ));
    }

    if segmentation.is_single_word() {
        let word = &segmentation.words[0];
        let points = if word.len() <= 6 { 10 } else { 7 };
        factors.push(ScoreFactor::new(
            "Dictionary Word",
            points,
            format!("'{word}' is a real word"),
        ));
    }

    let premium = premium_words(lexicon, &segmentation);
    if !premium.is_empty() {
        let points = (premium.len() as i32 * PREMIUM_POINTS).min(PREMIUM_CAP);
        factors.push(ScoreFactor::new(
            "Premium Keywords",
            points,
            premium.join(", "),
        ));
    }

    let niche = detect_niche(&segmentation);
    if !niche.is_general() {
        factors.push(ScoreFactor::new(
            "Niche Demand",
            niche_points(&niche),
            format!("{} ({} confidence)", niche.label, niche.confidence),
        ));
    }

    if name.has_hyphen() {
        factors.push(ScoreFactor::new("Hyphens", -8, "hyphens hurt type-in traffic"));
    }
    if name.has_digit() {
        factors.push(ScoreFactor::new("Numbers", -5, "digits are easy to mishear"));
    }

    let total: i32 = factors.iter().map(|f| f.points).sum();
    let score = total.clamp(MIN_SCORE, MAX_SCORE) as u32;

    tracing::debug!(
        domain = %name,
        score,
        niche = %niche.niche,
        duration_ms = %start.elapsed().as_millis(),
        "keyword demand scored"
    );

    KeywordDemandResult {
        score,
        label: demand_label(score).to_string(),
        grade: Grade::from_score(score),
        trending_keywords: trending,
        niche,
        factors,
        words: segmentation.words,
    }
}

fn toxic_result(keyword: &str) -> KeywordDemandResult {
    KeywordDemandResult {
        score: MIN_SCORE as u32,
        label: "☠️ Toxic Keyword".to_string(),
        grade: Grade::F,
        trending_keywords: Vec::new(),
        niche: NicheMatch::general(),
        factors: vec![ScoreFactor::new(
            "Penalty Keyword",
            -100,
            format!("contains '{keyword}'"),
        )],
        words: Vec::new(),
    }
}

/// Label for a demand score tier
pub fn demand_label(score: u32) -> &'static str {
    match score {
        85.. => "🔥 Surging Demand",
        70..=84 => "📈 Strong Demand",
        55..=69 => "✅ Solid Demand",
        40..=54 => "➖ Moderate Demand",
        25..=39 => "📉 Low Demand",
        _ => "❄️ Minimal Demand",
    }
}

/// Distinct statically trending words in order of appearance
fn trending_words(lexicon: &Lexicon, segmentation: &Segmentation) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for word in &segmentation.words {
        if lexicon.is_trending(word) && !found.contains(word) {
            found.push(word.clone());
        }
    }
    found
}

/// Distinct premium words that are not already credited as trending
fn premium_words(lexicon: &Lexicon, segmentation: &Segmentation) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for word in &segmentation.words {
        if lexicon.is_premium(word) && !lexicon.is_trending(word) && !found.contains(word) {
            found.push(word.clone());
        }
    }
    found
}

/// Pick the category matching the most segmented words.
///
/// Ties go to the category listed first.
pub fn detect_niche(segmentation: &Segmentation) -> NicheMatch {
    let lexicon = Lexicon::global();
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    let mut seen: Vec<&str> = Vec::new();

    for word in &segmentation.words {
        if seen.contains(&word.as_str()) {
            continue;
        }
        seen.push(word.as_str());
        for key in lexicon.categories_of(word) {
            *counts.entry(*key).or_default() += 1;
        }
    }

    let best = CATEGORIES
        .iter()
        .filter_map(|c| counts.get(c.key).map(|n| (c, *n)))
        .fold(None, |best: Option<(_, usize)>, (c, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((c, n)),
        });

    match best {
        Some((category, matches)) => {
            let confidence = if matches >= 2 {
                Confidence::High
            } else if segmentation.coverage() >= 0.8 {
                Confidence::Medium
            } else {
                Confidence::Low
            };
            NicheMatch {
                niche: category.key.to_string(),
                label: category.label.to_string(),
                multiplier: category.multiplier,
                confidence,
            }
        }
        None => NicheMatch::general(),
    }
}

fn niche_points(niche: &NicheMatch) -> i32 {
    let confidence = match niche.confidence {
        Confidence::High => 1.0,
        Confidence::Medium => 0.75,
        Confidence::Low => 0.5,
    };
    ((niche.multiplier - 1.0) * 20.0 * confidence).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(result: &KeywordDemandResult, label: &str) -> Option<i32> {
        result.factors.iter().find(|f| f.label == label).map(|f| f.points)
    }

    #[test]
    fn test_known_scores() {
        assert_eq!(score_keyword_demand("ai.com").score, 66);
        assert_eq!(score_keyword_demand("xyzabc.com").score, 25);
        assert_eq!(score_keyword_demand("crypto.ai").score, 51);
    }

    #[test]
    fn test_tld_factor_always_first() {
        for domain in ["ai.com", "zzz.museum", "nodot"] {
            let result = score_keyword_demand(domain);
            assert_eq!(result.factors[0].label, "TLD Demand");
        }
        assert_eq!(factor(&score_keyword_demand("x.museum"), "TLD Demand"), Some(2));
    }

    #[test]
    fn test_dictionary_word_bonus() {
        assert_eq!(factor(&score_keyword_demand("power.com"), "Dictionary Word"), Some(10));
        assert_eq!(factor(&score_keyword_demand("navigate.com"), "Dictionary Word"), Some(7));
        assert_eq!(factor(&score_keyword_demand("cloudpower.com"), "Dictionary Word"), None);
    }

    #[test]
    fn test_keyword_combo() {
        assert_eq!(factor(&score_keyword_demand("cloudpay.com"), "Keyword Combo"), Some(10));
        assert_eq!(factor(&score_keyword_demand("aicryptobot.com"), "Keyword Combo"), Some(15));
        assert_eq!(factor(&score_keyword_demand("cloud.com"), "Keyword Combo"), None);
        assert_eq!(factor(&score_keyword_demand("power.com"), "Keyword Combo"), None);
    }

    #[test]
    fn test_penalty_dominates() {
        let result = score_keyword_demand("buyviagra.com");
        assert_eq!(result.score, 1);
        assert_eq!(result.grade, Grade::F);
        assert!(result.label.contains("Toxic"));
        assert!(result.trending_keywords.is_empty());
        assert!(result.niche.is_general());

        // trending words do not rescue a toxic name
        assert_eq!(score_keyword_demand("aiporn.ai").score, 1);
    }

    #[test]
    fn test_trending_keywords_collected() {
        let result = score_keyword_demand("aicryptobot.com");
        assert_eq!(result.trending_keywords, vec!["ai", "crypto", "bot"]);
        assert_eq!(factor(&result, "Trending Keywords"), Some(29));
    }

    #[test]
    fn test_niche_detection() {
        let result = score_keyword_demand("aibot.com");
        assert_eq!(result.niche.niche, "ai_tech");
        assert_eq!(result.niche.confidence, Confidence::High);

        // one word each for energy and saas: table order breaks the tie
        assert_eq!(score_keyword_demand("cloudpower.com").niche.niche, "energy");
        assert!(score_keyword_demand("xyzabc.com").niche.is_general());
    }

    #[test]
    fn test_word_fragments_do_not_pick_niche() {
        // "ether", "med" and "pet" hide inside these words
        for domain in ["together.com", "meditate.com", "carpet.com"] {
            let result = score_keyword_demand(domain);
            assert!(result.niche.is_general(), "{domain}: {}", result.niche.niche);
            assert_eq!(result.words.len(), 1, "{domain}");
            assert!(factor(&result, "Dictionary Word").is_some(), "{domain}");
        }
    }

    #[test]
    fn test_hyphen_and_digit_penalties() {
        let result = score_keyword_demand("cloud-9.com");
        assert_eq!(factor(&result, "Hyphens"), Some(-8));
        assert_eq!(factor(&result, "Numbers"), Some(-5));
    }

    #[test]
    fn test_score_floor() {
        let result = score_keyword_demand("qxzvbnmqwrtplkjhg-77.zz");
        assert!(result.score >= 1);
        assert_eq!(result.grade, Grade::F);
    }

    #[test]
    fn test_labels_by_tier() {
        assert!(demand_label(90).contains("Surging"));
        assert!(demand_label(70).contains("Strong"));
        assert!(demand_label(40).contains("Moderate"));
        assert!(demand_label(1).contains("Minimal"));
    }
}
