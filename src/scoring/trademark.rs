//! Trademark risk screening against the built-in brand list.
//!
//! Rules are tried strongest first: an exact brand name is `high`, a name
//! containing a brand of four or more letters is `medium`, and a one-edit
//! near miss of a brand of five or more letters is `low`.

use crate::domain::DomainName;
use crate::lexicon::Lexicon;
use crate::types::{TrademarkCheck, TrademarkRisk};

/// Shortest brand that triggers a substring match
const MIN_CONTAINED_BRAND: usize = 4;

/// Shortest brand (and name) considered for near-miss matching
const MIN_FUZZY_LEN: usize = 5;

const MAX_FUZZY_DISTANCE: usize = 1;

/// Check a domain against the known-brand list
pub fn check_trademark_risk(domain: &str) -> TrademarkCheck {
    let name = DomainName::parse(domain);
    check_name(&name.compact())
}

pub(crate) fn check_name(compact: &str) -> TrademarkCheck {
    let lexicon = Lexicon::global();

    if compact.is_empty() {
        return TrademarkCheck::clear();
    }

    if lexicon.is_brand(compact) {
        return TrademarkCheck::matched(TrademarkRisk::High, compact);
    }

    // Longest contained brand wins so `youtube` beats a shorter overlap.
    let contained = lexicon
        .brands()
        .filter(|b| b.len() >= MIN_CONTAINED_BRAND && compact.contains(b))
        .fold(None, |best: Option<&str>, b| match best {
            Some(current) if current.len() >= b.len() => Some(current),
            _ => Some(b),
        });
    if let Some(brand) = contained {
        return TrademarkCheck::matched(TrademarkRisk::Medium, brand);
    }

    if compact.chars().count() >= MIN_FUZZY_LEN {
        let near = lexicon.brands().find(|b| {
            b.len() >= MIN_FUZZY_LEN
                && b.len().abs_diff(compact.len()) <= MAX_FUZZY_DISTANCE
                && edit_distance(compact, b) <= MAX_FUZZY_DISTANCE
        });
        if let Some(brand) = near {
            return TrademarkCheck::matched(TrademarkRisk::Low, brand);
        }
    }

    TrademarkCheck::clear()
}

/// Score for the brandability "Trademark Safety" dimension
pub fn safety_score(risk: TrademarkRisk) -> u32 {
    match risk {
        TrademarkRisk::None => 100,
        TrademarkRisk::Low => 70,
        TrademarkRisk::Medium => 35,
        TrademarkRisk::High => 5,
    }
}

/// Levenshtein distance between two strings
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    let mut previous: Vec<usize> = (0..=s2.len()).collect();
    let mut current = vec![0; s2.len() + 1];

    for i in 1..=s1.len() {
        current[0] = i;
        for j in 1..=s2.len() {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2.len()]
}

impl TrademarkCheck {
    fn clear() -> Self {
        Self {
            risk_level: TrademarkRisk::None,
            matched_brand: None,
        }
    }

    fn matched(risk_level: TrademarkRisk, brand: &str) -> Self {
        Self {
            risk_level,
            matched_brand: Some(brand.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_brand_is_high() {
        let check = check_trademark_risk("google.com");
        assert_eq!(check.risk_level, TrademarkRisk::High);
        assert_eq!(check.matched_brand.as_deref(), Some("google"));
        assert_eq!(check_trademark_risk("WWW.Google.io").risk_level, TrademarkRisk::High);
    }

    #[test]
    fn test_hyphens_ignored() {
        assert_eq!(check_trademark_risk("face-book.net").risk_level, TrademarkRisk::High);
    }

    #[test]
    fn test_contained_brand_is_medium() {
        let check = check_trademark_risk("googlemaps.com");
        assert_eq!(check.risk_level, TrademarkRisk::Medium);
        assert_eq!(check.matched_brand.as_deref(), Some("google"));
        assert_eq!(check_trademark_risk("bestnetflixdeals.com").risk_level, TrademarkRisk::Medium);
    }

    #[test]
    fn test_short_brands_only_match_exactly() {
        // "hp" and "ibm" are brands but too short for containment
        assert_eq!(check_trademark_risk("hpcloud.com").risk_level, TrademarkRisk::None);
        assert_eq!(check_trademark_risk("ibm.com").risk_level, TrademarkRisk::High);
    }

    #[test]
    fn test_near_miss_is_low() {
        let check = check_trademark_risk("gogle.com");
        assert_eq!(check.risk_level, TrademarkRisk::Low);
        assert_eq!(check.matched_brand.as_deref(), Some("google"));
        assert_eq!(check_trademark_risk("amazan.com").risk_level, TrademarkRisk::Low);
    }

    #[test]
    fn test_clean_names() {
        for domain in ["cloudpower.com", "navigate.com", "crypto.ai", "", "1234.com"] {
            let check = check_trademark_risk(domain);
            assert_eq!(check.risk_level, TrademarkRisk::None, "{domain}");
            assert!(check.matched_brand.is_none());
        }
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("same", "same"), 0);
        assert_eq!(edit_distance("gogle", "google"), 1);
    }

    #[test]
    fn test_safety_scores() {
        assert_eq!(safety_score(TrademarkRisk::None), 100);
        assert_eq!(safety_score(TrademarkRisk::High), 5);
        assert!(safety_score(TrademarkRisk::Low) > safety_score(TrademarkRisk::Medium));
    }
}
