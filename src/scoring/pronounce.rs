//! Pronounceability scoring.
//!
//! Starts from a neutral 50 and moves it by length, word count, vowel balance,
//! harsh consonant clusters and how naturally adjacent letters flow.

use regex::Regex;
use std::sync::LazyLock;

use super::segment::{segment, Segmentation};
use crate::domain::DomainName;
use crate::lexicon::Lexicon;
use crate::types::{PronounceGrade, PronounceabilityResult, ScoreFactor};

const BASELINE: i32 = 50;

/// Vowels for balance purposes; `y` counts.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Three or more consecutive consonants (`y` excluded)
static BAD_CLUSTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[bcdfghjklmnpqrstvwxz]{3,}").expect("cluster pattern compiles")
});

const MAX_CLUSTER_PENALTY: i32 = 25;

/// Score how easy a domain is to say out loud
pub fn score_pronounceability(domain: &str) -> PronounceabilityResult {
    let name = DomainName::parse(domain);
    let segmentation = segment(&name.cleaned);
    pronounceability_of(&name.cleaned, &segmentation)
}

pub(crate) fn pronounceability_of(cleaned: &str, segmentation: &Segmentation) -> PronounceabilityResult {
    if cleaned.is_empty() {
        return PronounceabilityResult {
            score: 0,
            grade: PronounceGrade::VeryPoor,
            factors: Vec::new(),
        };
    }

    let mut factors = vec![
        length_factor(cleaned.len()),
        word_count_factor(segmentation),
        vowel_factor(cleaned),
    ];
    if let Some(factor) = cluster_factor(cleaned) {
        factors.push(factor);
    }
    if let Some(factor) = bigram_factor(cleaned) {
        factors.push(factor);
    }

    let total = BASELINE + factors.iter().map(|f| f.points).sum::<i32>();
    let score = total.clamp(0, 100) as u32;

    factors.sort_by_key(|f| std::cmp::Reverse(f.points.abs()));

    PronounceabilityResult {
        score,
        grade: PronounceGrade::from_score(score),
        factors,
    }
}

fn length_factor(len: usize) -> ScoreFactor {
    let (points, detail) = match len {
        4..=8 => (15, format!("{len} letters is the sweet spot")),
        2..=3 => (10, format!("{len} letters is effortless to say")),
        9..=12 => (0, format!("{len} letters is long but manageable")),
        0..=1 => (-10, "a single letter is not a word".to_string()),
        _ => (-15, format!("{len} letters is a mouthful")),
    };
    ScoreFactor::new("Length", points, detail)
}

fn word_count_factor(segmentation: &Segmentation) -> ScoreFactor {
    let (points, detail) = match segmentation.word_count() {
        0 => (-5, "no recognizable words".to_string()),
        1 if segmentation.coverage() >= 0.8 => (15, "reads as a single word".to_string()),
        1 => (5, "one recognizable word plus filler".to_string()),
        2 => (8, "two words".to_string()),
        3 => (0, "three words".to_string()),
        n => (-8, format!("{n} words is hard to say in one breath")),
    };
    ScoreFactor::new("Word Count", points, detail)
}

/// Share of vowels in a cleaned name, 0.0 when empty
pub(crate) fn vowel_ratio(cleaned: &str) -> f64 {
    let len = cleaned.chars().count();
    if len == 0 {
        return 0.0;
    }
    let vowels = cleaned.chars().filter(|c| VOWELS.contains(c)).count();
    vowels as f64 / len as f64
}

pub(crate) fn is_balanced(ratio: f64) -> bool {
    (0.25..=0.6).contains(&ratio)
}

pub(crate) fn has_hard_cluster(cleaned: &str) -> bool {
    BAD_CLUSTERS.is_match(cleaned)
}

fn vowel_factor(cleaned: &str) -> ScoreFactor {
    let ratio = vowel_ratio(cleaned);

    let points = if is_balanced(ratio) {
        10
    } else if !(0.15..=0.75).contains(&ratio) {
        -15
    } else {
        -5
    };
    ScoreFactor::new(
        "Vowel Balance",
        points,
        format!("{:.0}% vowels (ideal 25-60%)", ratio * 100.0),
    )
}

fn cluster_factor(cleaned: &str) -> Option<ScoreFactor> {
    let clusters: Vec<&str> = BAD_CLUSTERS.find_iter(cleaned).map(|m| m.as_str()).collect();
    if clusters.is_empty() {
        return None;
    }

    let penalty: i32 = clusters
        .iter()
        .map(|c| 10 + 3 * (c.len() as i32 - 3))
        .sum();
    Some(ScoreFactor::new(
        "Consonant Clusters",
        -penalty.min(MAX_CLUSTER_PENALTY),
        format!("hard clusters: {}", clusters.join(", ")),
    ))
}

fn bigram_factor(cleaned: &str) -> Option<ScoreFactor> {
    let lexicon = Lexicon::global();
    let bytes = cleaned.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let total = bytes.len() - 1;
    let good = bytes
        .windows(2)
        .filter(|pair| {
            std::str::from_utf8(pair)
                .map(|p| lexicon.is_good_bigram(p))
                .unwrap_or(false)
        })
        .count();
    let fraction = good as f64 / total as f64;

    Some(ScoreFactor::new(
        "Bigram Flow",
        (fraction * 20.0).round() as i32,
        format!("{good} of {total} letter pairs flow naturally"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        let result = score_pronounceability("");
        assert_eq!(result.score, 0);
        assert!(result.factors.is_empty());
        assert_eq!(score_pronounceability("1234.com").score, 0);
    }

    #[test]
    fn test_real_word_beats_gibberish() {
        let cloud = score_pronounceability("cloud.com");
        let junk = score_pronounceability("xkqzrt.com");
        assert!(cloud.score > junk.score);
        assert!(cloud.score >= 80);
        assert_eq!(cloud.grade, PronounceGrade::Excellent);
    }

    #[test]
    fn test_cluster_penalty_reported() {
        let result = score_pronounceability("xkqzrt.com");
        let cluster = result
            .factors
            .iter()
            .find(|f| f.label == "Consonant Clusters")
            .map(|f| f.points);
        assert_eq!(cluster, Some(-19));
    }

    #[test]
    fn test_factors_ranked_by_impact() {
        let result = score_pronounceability("brandable.io");
        let impacts: Vec<i32> = result.factors.iter().map(|f| f.points.abs()).collect();
        let mut sorted = impacts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(impacts, sorted);
    }

    #[test]
    fn test_bounds_and_determinism() {
        for domain in ["a.com", "strengths.net", "aeiouaeiou.io", "qwrtypsdfg.xyz", "go.ai"] {
            let first = score_pronounceability(domain);
            assert!(first.score <= 100);
            assert_eq!(first, score_pronounceability(domain));
        }
    }
}
